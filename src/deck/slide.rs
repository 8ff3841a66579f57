//! Slide records and their variant-specific payload schemas.

/// Closed set of slide kinds. Each kind has its own payload shape and
/// its own layout rule in the renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SlideVariant {
    Cover,
    Problem,
    Solution,
    Innovation,
    Competition,
    Market,
    Economics,
    Traction,
    GoToMarket,
    Projections,
    Ask,
    Timing,
    Team,
    Risks,
    Exit,
    Closing,
}

impl SlideVariant {
    /// Every variant, in canonical deck order.
    pub const ALL: [SlideVariant; 16] = [
        SlideVariant::Cover,
        SlideVariant::Problem,
        SlideVariant::Solution,
        SlideVariant::Innovation,
        SlideVariant::Competition,
        SlideVariant::Market,
        SlideVariant::Economics,
        SlideVariant::Traction,
        SlideVariant::GoToMarket,
        SlideVariant::Projections,
        SlideVariant::Ask,
        SlideVariant::Timing,
        SlideVariant::Team,
        SlideVariant::Risks,
        SlideVariant::Exit,
        SlideVariant::Closing,
    ];
}

/// Pictogram tags carried by payload items. Resolved to glyphs in the
/// view layer only; the model treats them as opaque content data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Icon {
    Shield,
    Zap,
    Lock,
    Smartphone,
    DollarSign,
}

/// Delivery status of a roadmap milestone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MilestoneStatus {
    Complete,
    InProgress,
    Planned,
}

impl MilestoneStatus {
    pub fn label(self) -> &'static str {
        match self {
            MilestoneStatus::Complete => "Complete",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Planned => "Planned",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PainPoint {
    pub icon: Icon,
    pub text: String,
    pub stat: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pillar {
    pub icon: Icon,
    pub title: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Breakthrough {
    pub title: String,
    pub novelty: String,
    pub desc: String,
    pub impact: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rival {
    pub name: String,
    pub advantage: String,
    pub gaps: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub name: String,
    pub tam: String,
    pub users: String,
    pub pain: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Milestone {
    pub name: String,
    pub status: MilestoneStatus,
    pub date: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RolloutPhase {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub year: String,
    pub users: String,
    pub tx_volume: String,
    pub market_cap: String,
    pub tvl: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    pub item: String,
    pub amount: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimingDriver {
    pub reason: String,
    pub impact: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpenRole {
    pub role: String,
    pub profile: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RiskEntry {
    pub risk: String,
    pub mitigation: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExitScenario {
    pub name: String,
    pub potential: String,
    pub detail: String,
    pub timeline: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    pub website: String,
    pub email: String,
    pub docs: String,
}

/// Variant-specific slide content. One data-carrying arm per
/// [`SlideVariant`]; the shapes are fixed and known at build time.
#[derive(Clone, Debug, PartialEq)]
pub enum SlidePayload {
    Cover {
        lead: String,
    },
    Problem {
        points: Vec<PainPoint>,
    },
    Solution {
        pillars: Vec<Pillar>,
    },
    Innovation {
        breakthroughs: Vec<Breakthrough>,
    },
    Competition {
        rivals: Vec<Rival>,
    },
    Market {
        segments: Vec<Segment>,
    },
    Economics {
        supply: String,
        revenue: Vec<String>,
        staking: String,
    },
    Traction {
        milestones: Vec<Milestone>,
    },
    GoToMarket {
        phases: Vec<RolloutPhase>,
    },
    Projections {
        conservative: Projection,
        growth: Projection,
    },
    Ask {
        amount: String,
        allocations: Vec<Allocation>,
        runway: String,
    },
    Timing {
        drivers: Vec<TimingDriver>,
    },
    Team {
        roles: Vec<OpenRole>,
        advisors: String,
    },
    Risks {
        entries: Vec<RiskEntry>,
    },
    Exit {
        scenarios: Vec<ExitScenario>,
    },
    Closing {
        cta: String,
        next_steps: Vec<String>,
        contact: Contact,
    },
}

impl SlidePayload {
    /// The variant this payload shape belongs to.
    pub fn variant(&self) -> SlideVariant {
        match self {
            SlidePayload::Cover { .. } => SlideVariant::Cover,
            SlidePayload::Problem { .. } => SlideVariant::Problem,
            SlidePayload::Solution { .. } => SlideVariant::Solution,
            SlidePayload::Innovation { .. } => SlideVariant::Innovation,
            SlidePayload::Competition { .. } => SlideVariant::Competition,
            SlidePayload::Market { .. } => SlideVariant::Market,
            SlidePayload::Economics { .. } => SlideVariant::Economics,
            SlidePayload::Traction { .. } => SlideVariant::Traction,
            SlidePayload::GoToMarket { .. } => SlideVariant::GoToMarket,
            SlidePayload::Projections { .. } => SlideVariant::Projections,
            SlidePayload::Ask { .. } => SlideVariant::Ask,
            SlidePayload::Timing { .. } => SlideVariant::Timing,
            SlidePayload::Team { .. } => SlideVariant::Team,
            SlidePayload::Risks { .. } => SlideVariant::Risks,
            SlidePayload::Exit { .. } => SlideVariant::Exit,
            SlidePayload::Closing { .. } => SlideVariant::Closing,
        }
    }
}

/// One unit of deck content: a title, an optional subtitle, the declared
/// variant tag, and the variant-specific payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub title: String,
    pub subtitle: Option<String>,
    pub variant: SlideVariant,
    pub payload: SlidePayload,
}

impl Slide {
    pub fn new(title: impl Into<String>, payload: SlidePayload) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            variant: payload.variant(),
            payload,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}
