//! The bundled Ecliptica investor deck.
//!
//! Copy is carried as-is; the model layer treats it as opaque content.

use super::{
    Allocation, Breakthrough, Contact, Deck, DeckError, ExitScenario, Icon, Milestone,
    MilestoneStatus, OpenRole, PainPoint, Pillar, Projection, RiskEntry, Rival, RolloutPhase,
    Segment, Slide, SlidePayload, TimingDriver,
};

/// Assembles the bundled deck. Fails only if the content tables here are
/// inconsistent, which the deck tests pin down.
pub fn ecliptica_deck() -> Result<Deck, DeckError> {
    Deck::new(
        "Ecliptica",
        vec![
            cover(),
            problem(),
            solution(),
            innovation(),
            competition(),
            market(),
            economics(),
            traction(),
            go_to_market(),
            projections(),
            ask(),
            timing(),
            team(),
            risks(),
            exit(),
            closing(),
        ],
    )
}

fn cover() -> Slide {
    Slide::new(
        "Ecliptica",
        SlidePayload::Cover {
            lead: "The World's First Post-Quantum Privacy Blockchain with Practical Performance"
                .into(),
        },
    )
    .with_subtitle("Privacy at the Speed of Light")
}

fn problem() -> Slide {
    Slide::new(
        "The $320B Problem",
        SlidePayload::Problem {
            points: vec![
                PainPoint {
                    icon: Icon::Lock,
                    text: "Current privacy chains (Zcash, Monero) vulnerable to quantum computers"
                        .into(),
                    stat: "Harvest now, decrypt later".into(),
                },
                PainPoint {
                    icon: Icon::Zap,
                    text: "Privacy comes at massive performance cost".into(),
                    stat: "<1,000 TPS".into(),
                },
                PainPoint {
                    icon: Icon::DollarSign,
                    text: "MEV exploitation costs users billions annually".into(),
                    stat: "$2B+ extracted in 2024".into(),
                },
                PainPoint {
                    icon: Icon::Smartphone,
                    text: "Privacy requires running full nodes - impossible on mobile".into(),
                    stat: "99% can't validate".into(),
                },
            ],
        },
    )
}

fn solution() -> Slide {
    Slide::new(
        "The Ecliptica Solution",
        SlidePayload::Solution {
            pillars: vec![
                Pillar {
                    icon: Icon::Shield,
                    title: "Post-Quantum Security".into(),
                    desc: "100% quantum-resistant crypto stack (ML-KEM, ML-DSA, zk-STARKs)".into(),
                },
                Pillar {
                    icon: Icon::Zap,
                    title: "Practical Performance".into(),
                    desc: "50,000 TPS target with sub-second finality".into(),
                },
                Pillar {
                    icon: Icon::Smartphone,
                    title: "Mobile-First Privacy".into(),
                    desc: "Light clients that verify on phones via recursive proofs".into(),
                },
                Pillar {
                    icon: Icon::Lock,
                    title: "95% MEV Reduction".into(),
                    desc: "Threshold encryption + cryptographic guarantees".into(),
                },
            ],
        },
    )
}

fn innovation() -> Slide {
    Slide::new(
        "Groundbreaking Innovation",
        SlidePayload::Innovation {
            breakthroughs: vec![
                Breakthrough {
                    title: "Hierarchical Viewing Keys (HDVK)".into(),
                    novelty: "10/10".into(),
                    desc: "Academic publication-worthy. First post-quantum deterministic viewing key system."
                        .into(),
                    impact: "Enables regulated privacy & compliance".into(),
                },
                Breakthrough {
                    title: "Encrypted State Execution".into(),
                    novelty: "9/10".into(),
                    desc: "Solves unsolved problem: smart contracts over fully encrypted state."
                        .into(),
                    impact: "Confidential DeFi & private computation".into(),
                },
                Breakthrough {
                    title: "ShardBFT + zk-Finality".into(),
                    novelty: "9/10".into(),
                    desc: "Novel consensus combining BFT, sharding, and recursive STARKs.".into(),
                    impact: "Mobile devices validate entire chain".into(),
                },
            ],
        },
    )
}

fn competition() -> Slide {
    Slide::new(
        "Competitive Advantage",
        SlidePayload::Competition {
            rivals: vec![
                Rival {
                    name: "Zcash".into(),
                    advantage: "Post-quantum secure, 166× faster, smart contracts".into(),
                    gaps: vec![
                        "Quantum vulnerable".into(),
                        "<300 TPS".into(),
                        "No contracts".into(),
                    ],
                },
                Rival {
                    name: "Ethereum".into(),
                    advantage: "Native privacy, 666× faster base layer, quantum-resistant".into(),
                    gaps: vec![
                        "No privacy".into(),
                        "15 TPS".into(),
                        "Quantum vulnerable".into(),
                    ],
                },
                Rival {
                    name: "Monero".into(),
                    advantage: "Deterministic viewing keys, smart contracts, quantum-resistant"
                        .into(),
                    gaps: vec![
                        "No viewing keys".into(),
                        "No contracts".into(),
                        "Quantum vulnerable".into(),
                    ],
                },
                Rival {
                    name: "Secret Network".into(),
                    advantage: "No TEE dependency, post-quantum, 50× faster".into(),
                    gaps: vec![
                        "TEE required".into(),
                        "Classical crypto".into(),
                        "~1K TPS".into(),
                    ],
                },
            ],
        },
    )
}

fn market() -> Slide {
    Slide::new(
        "Target Markets",
        SlidePayload::Market {
            segments: vec![
                Segment {
                    name: "Privacy-Focused DeFi".into(),
                    tam: "$50B".into(),
                    users: "Institutional traders, dark pools, confidential trading".into(),
                    pain: "$2B/year lost to MEV".into(),
                },
                Segment {
                    name: "Post-Quantum Security".into(),
                    tam: "$30B".into(),
                    users: "Government contracts, long-term value storage, institutional custody"
                        .into(),
                    pain: "Quantum computers threaten all ECC-based chains".into(),
                },
                Segment {
                    name: "Regulated Privacy".into(),
                    tam: "$20B".into(),
                    users: "Financial institutions, compliance officers, auditors".into(),
                    pain: "Need privacy with selective disclosure".into(),
                },
                Segment {
                    name: "Cross-Chain Privacy".into(),
                    tam: "$15B".into(),
                    users: "Multi-chain portfolio managers, privacy protocol developers".into(),
                    pain: "No private bridges between major chains".into(),
                },
            ],
        },
    )
}

fn economics() -> Slide {
    Slide::new(
        "Business Model & Token Economics",
        SlidePayload::Economics {
            supply: "1B ECLIPT (1.3B with tail inflation)".into(),
            revenue: vec![
                "Transaction fees: 70% burned (deflationary), 30% to validators".into(),
                "Bridge fees: 0.1% of bridged value".into(),
                "MEV redistribution: Fair sequencing auction revenue".into(),
            ],
            staking: "60% target stake ratio, 8% APY at target, 100% slashing for attacks".into(),
        },
    )
}

fn traction() -> Slide {
    Slide::new(
        "Traction & Milestones",
        SlidePayload::Traction {
            milestones: vec![
                Milestone {
                    name: "Technical Design".into(),
                    status: MilestoneStatus::Complete,
                    date: "Q4 2024".into(),
                    desc: "25+ specification documents, 95% architecture complete".into(),
                },
                Milestone {
                    name: "Core Validation".into(),
                    status: MilestoneStatus::InProgress,
                    date: "Q1 2025".into(),
                    desc: "STARK benchmarks, encrypted execution POC".into(),
                },
                Milestone {
                    name: "Testnet Launch".into(),
                    status: MilestoneStatus::Planned,
                    date: "Q3 2025".into(),
                    desc: "4 shards, 5-10K TPS target, mobile light clients".into(),
                },
                Milestone {
                    name: "Mainnet Launch".into(),
                    status: MilestoneStatus::Planned,
                    date: "Q1 2026".into(),
                    desc: "Security audits complete, 50K TPS target".into(),
                },
            ],
        },
    )
}

fn go_to_market() -> Slide {
    Slide::new(
        "Go-to-Market Strategy",
        SlidePayload::GoToMarket {
            phases: vec![
                RolloutPhase {
                    name: "Phase 1: Developer Ecosystem (Q2-Q3 2025)".into(),
                    items: vec![
                        "SDK releases (Rust, Python, JS)".into(),
                        "Developer grants program".into(),
                        "Hackathons & bounties".into(),
                    ],
                },
                RolloutPhase {
                    name: "Phase 2: Strategic Partnerships (Q3-Q4 2025)".into(),
                    items: vec![
                        "Major wallet integrations (3+)".into(),
                        "DEX protocol partnerships".into(),
                        "Institutional pilot programs".into(),
                    ],
                },
                RolloutPhase {
                    name: "Phase 3: Mainnet Launch (Q1 2026)".into(),
                    items: vec![
                        "Exchange listings (CEX + DEX)".into(),
                        "Liquidity mining programs".into(),
                        "Enterprise onboarding".into(),
                    ],
                },
            ],
        },
    )
}

fn projections() -> Slide {
    Slide::new(
        "Financial Projections",
        SlidePayload::Projections {
            conservative: Projection {
                year: "Year 1".into(),
                users: "10K-50K".into(),
                tx_volume: "100K-500K daily".into(),
                market_cap: "$100M-$500M".into(),
                tvl: "$10M-$50M".into(),
            },
            growth: Projection {
                year: "Year 3".into(),
                users: "500K-1M".into(),
                tx_volume: "5M-20M daily".into(),
                market_cap: "$2B-$10B".into(),
                tvl: "$500M-$2B".into(),
            },
        },
    )
}

fn ask() -> Slide {
    Slide::new(
        "The Ask",
        SlidePayload::Ask {
            amount: "$10-20M Series A".into(),
            allocations: vec![
                Allocation {
                    item: "Engineering (60%)".into(),
                    amount: "$6-12M".into(),
                    desc: "10-15 elite engineers: cryptographers, distributed systems, Rust developers"
                        .into(),
                },
                Allocation {
                    item: "Security & Audits (15%)".into(),
                    amount: "$1.5-3M".into(),
                    desc: "Multiple independent audits, formal verification, bug bounty program"
                        .into(),
                },
                Allocation {
                    item: "Operations & Infrastructure (15%)".into(),
                    amount: "$1.5-3M".into(),
                    desc: "Cloud infrastructure, testing environments, monitoring systems".into(),
                },
                Allocation {
                    item: "Business Development (10%)".into(),
                    amount: "$1-2M".into(),
                    desc: "Partnerships, exchange listings, market making, legal & compliance"
                        .into(),
                },
            ],
            runway: "24-30 months to mainnet launch".into(),
        },
    )
}

fn timing() -> Slide {
    Slide::new(
        "Why Now?",
        SlidePayload::Timing {
            drivers: vec![
                TimingDriver {
                    reason: "NIST post-quantum standards finalized (2024)".into(),
                    impact: "ML-KEM/ML-DSA now production-ready".into(),
                },
                TimingDriver {
                    reason: "Quantum computing advancing rapidly".into(),
                    impact: "IBM 1,121-qubit system, NISQ era ending soon".into(),
                },
                TimingDriver {
                    reason: "Privacy regulations tightening globally".into(),
                    impact: "GDPR, MiCA requiring privacy-preserving solutions".into(),
                },
                TimingDriver {
                    reason: "MEV crisis in DeFi".into(),
                    impact: "$2B+ extracted annually, institutional adoption blocked".into(),
                },
                TimingDriver {
                    reason: "Mobile-first crypto adoption".into(),
                    impact: "99% of users need light client solutions".into(),
                },
            ],
        },
    )
}

fn team() -> Slide {
    Slide::new(
        "Team Requirements",
        SlidePayload::Team {
            roles: vec![
                OpenRole {
                    role: "Co-Founder / CTO".into(),
                    profile: "PhD in cryptography or distributed systems, 5+ years blockchain experience"
                        .into(),
                },
                OpenRole {
                    role: "Lead Cryptographer".into(),
                    profile: "Post-quantum crypto expert, academic publications in lattice-based cryptography"
                        .into(),
                },
                OpenRole {
                    role: "Protocol Engineers (3-4)".into(),
                    profile: "Expert Rust developers with consensus mechanism experience".into(),
                },
                OpenRole {
                    role: "Security Lead".into(),
                    profile: "10+ years security, formal verification background".into(),
                },
                OpenRole {
                    role: "Business Development Lead".into(),
                    profile: "Web3 institutional relationships, fundraising experience".into(),
                },
            ],
            advisors: "Seeking advisors from Zcash, StarkWare, Ethereum Foundation".into(),
        },
    )
}

fn risks() -> Slide {
    Slide::new(
        "Risk Mitigation",
        SlidePayload::Risks {
            entries: vec![
                RiskEntry {
                    risk: "STARK proof generation too slow".into(),
                    mitigation: "Phase 0 validation with real benchmarks before full implementation"
                        .into(),
                    status: "Q1 2025".into(),
                },
                RiskEntry {
                    risk: "Encrypted state execution unsolved".into(),
                    mitigation: "3 execution models in parallel, select best performing".into(),
                    status: "Q1 2025".into(),
                },
                RiskEntry {
                    risk: "Post-quantum crypto overhead".into(),
                    mitigation: "Tiered execution model (public/encrypted/max-privacy)".into(),
                    status: "In design".into(),
                },
                RiskEntry {
                    risk: "Developer adoption challenge".into(),
                    mitigation: "Extensive SDK support, familiar WASM contracts, generous grants"
                        .into(),
                    status: "Q2 2025".into(),
                },
                RiskEntry {
                    risk: "Market timing / competition".into(),
                    mitigation: "First-mover advantage, novel IP (HDVK patent pending)".into(),
                    status: "Ongoing".into(),
                },
            ],
        },
    )
}

fn exit() -> Slide {
    Slide::new(
        "Exit Opportunities",
        SlidePayload::Exit {
            scenarios: vec![
                ExitScenario {
                    name: "Strategic Acquisition".into(),
                    potential: "$500M-$2B".into(),
                    detail: "Major L1s (Ethereum Foundation, Solana Labs), Privacy-focused protocols, Enterprise blockchain companies"
                        .into(),
                    timeline: "3-5 years".into(),
                },
                ExitScenario {
                    name: "Token Public Sale".into(),
                    potential: "$2B-$10B FDV".into(),
                    detail: "Mainnet launch with 10K+ active users, institutional adoption validated"
                        .into(),
                    timeline: "2-3 years".into(),
                },
                ExitScenario {
                    name: "Continued Independence".into(),
                    potential: "$10B+ FDV".into(),
                    detail: "Become dominant post-quantum privacy L1, capture significant DeFi market share"
                        .into(),
                    timeline: "5-7 years".into(),
                },
            ],
        },
    )
}

fn closing() -> Slide {
    Slide::new(
        "Contact & Next Steps",
        SlidePayload::Closing {
            cta: "Join us in building the quantum-resistant future of private blockchain technology"
                .into(),
            next_steps: vec![
                "Technical deep-dive with engineering team".into(),
                "Validation phase results review (Q1 2025)".into(),
                "Partnership discussions with strategic investors".into(),
                "Token sale structure & terms discussion".into(),
            ],
            contact: Contact {
                website: "ecliptica.io".into(),
                email: "founders@ecliptica.io".into(),
                docs: "docs.ecliptica.io".into(),
            },
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideVariant;

    #[test]
    fn bundled_deck_assembles() {
        let deck = ecliptica_deck().expect("bundled deck must validate");
        assert_eq!(deck.len(), 16);
        assert_eq!(deck.name(), "Ecliptica");
    }

    #[test]
    fn bundled_deck_covers_every_variant_once() {
        let deck = ecliptica_deck().unwrap();
        let variants: Vec<SlideVariant> = deck.slides().iter().map(|s| s.variant).collect();
        assert_eq!(variants, SlideVariant::ALL.to_vec());
    }
}
