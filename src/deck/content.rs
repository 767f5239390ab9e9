//! Static deck content
//!
//! The talk "2025 Is the End of Coding", as presented. Pure data; wording
//! and asset paths have no behavior attached.

use super::{Block, Card, Deck, Emphasis, Slide};

fn img(name: &str) -> String {
    format!("assets/img/{name}")
}

/// Build the standard 18-slide deck.
pub fn standard() -> Deck {
    Deck::new(vec![
        Slide::new("2025 Is the End of Coding")
            .block(Block::SponsorStrip {
                path: img("sponsors.png"),
            })
            .block(Block::Title {
                text: "2025 Is the End".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Title {
                text: "of Coding".into(),
                emphasis: Emphasis::Accent,
            })
            .block(Block::Subtitle {
                text: "Software Architects Will Lead the Future".into(),
            })
            .block(Block::Caption {
                text: "Jordan Fischer  ·  28.06.2025".into(),
            })
            .block(Block::Caption {
                text: "architects-lead.dev".into(),
            })
            .notes("Welcome slide; let the ambient layer breathe before talking."),
        Slide::new("The claim").block(Block::Quote {
            text: "\"AI will write most code in 12-18 months; fully replace human engineers\""
                .into(),
            attribution: "A big-tech CEO, April 2025 (podcast)".into(),
        }),
        Slide::new("Why believe this guy?")
            .block(Block::Image {
                path: img("ceo-avatar-meme.jpg"),
                width: 500.0,
                caption: None,
            })
            .block(Block::Heading {
                text: "But why should you believe this guy?".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Body {
                text: "Fair question. Let's look at the data instead.".into(),
                large: false,
            }),
        Slide::new("A secret").block(Block::Heading {
            text: "I have a secret to tell".into(),
            emphasis: Emphasis::Normal,
        }),
        Slide::new("Real talk")
            .block(Block::Heading {
                text: "Real talk:".into(),
                emphasis: Emphasis::Accent,
            })
            .block(Block::Body {
                text: "500K+ lines of production code".into(),
                large: true,
            })
            .block(Block::Body {
                text: "100% AI-generated".into(),
                large: true,
            })
            .block(Block::Body {
                text: "0% human-written".into(),
                large: true,
            }),
        Slide::new("My AI evolution journey")
            .block(Block::Heading {
                text: "My AI Evolution Journey".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Cards {
                columns: 1,
                cards: vec![
                    Card::new("Inline autocompletion", "Started with tab-complete suggestions"),
                    Card::new("AI pair-programming editors", "Leveled up with chat-driven edits"),
                    Card::new("Full-stack generators", "Whole apps scaffolded from a prompt"),
                    Card::new("Big AHA moment!", "I can build anything without coding")
                        .emphasis(Emphasis::Highlight),
                    Card::new("Agentic CLI tools", "Game over. Never looked back.")
                        .emphasis(Emphasis::Accent),
                ],
            }),
        Slide::new("Then this happened")
            .block(Block::Heading {
                text: "Then This Happened".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Image {
                path: img("max-plan-announcement.jpg"),
                width: 600.0,
                caption: None,
            }),
        Slide::new("How it started")
            .block(Block::Heading {
                text: "This is how it all started".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Image {
                path: img("usage-costs-1.png"),
                width: 800.0,
                caption: Some("My agent usage costs".into()),
            }),
        Slide::new("How it continued")
            .block(Block::Heading {
                text: "This is how it continued".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Image {
                path: img("usage-costs-2.png"),
                width: 800.0,
                caption: Some("My agent usage costs - continued".into()),
            }),
        Slide::new("How it ended")
            .block(Block::Heading {
                text: "This is how it all ended".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Image {
                path: img("usage-costs-3.png"),
                width: 800.0,
                caption: Some("My agent usage costs - final".into()),
            }),
        Slide::new("The agent in action")
            .block(Block::Heading {
                text: "The Agent in Action".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Image {
                path: img("agent-session.png"),
                width: 800.0,
                caption: Some("Reworked these very slides twenty minutes ago".into()),
            }),
        Slide::new("What do I build with it?")
            .block(Block::Heading {
                text: "What do I build with it?".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Cards {
                columns: 2,
                cards: vec![
                    Card::new("DevOps Tasks", "Terraform · Ansible · Bash · K8s configs"),
                    Card::new("Frontends", "React · Next.js · Vanilla JS"),
                    Card::new("Backends", "Python · Node.js · Go"),
                    Card::new("Algorithms", "Diffing · Optimization · ML Classifiers"),
                ],
            }),
        Slide::new("My AI workflow")
            .block(Block::Heading {
                text: "My AI Workflow".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Steps {
                steps: vec![
                    "Define the smallest task possible".into(),
                    "The agent returns a solution".into(),
                    "Manual approval (auto-approve mode)".into(),
                    "Rinse and repeat".into(),
                ],
            }),
        Slide::new("Perfect tech stack")
            .block(Block::Heading {
                text: "Perfect Tech Stack for Agents".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Cards {
                columns: 2,
                cards: vec![
                    Card::new("Frontend", "React + TypeScript - ideal for component generation"),
                    Card::new("Backend", "Golang - agents know Go patterns well"),
                    Card::new("Infrastructure", "Terraform + Bash - declarative and scriptable"),
                    Card::new("Algorithms", "Any language - agents excel at logic problems"),
                ],
            }),
        Slide::new("What was unexpected")
            .block(Block::Heading {
                text: "What was unexpected...".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Quote {
                text: "Agents excel at marketing and conversion content".into(),
                attribution: "Way stronger than I expected from a coding tool".into(),
            })
            .block(Block::Cards {
                columns: 3,
                cards: vec![
                    Card::new("Landing Pages", "Conversion-focused copy"),
                    Card::new("Email Campaigns", "Persuasive sequences"),
                    Card::new("Ad Copy", "High-converting ads"),
                ],
            }),
        Slide::new("The alternatives")
            .block(Block::Heading {
                text: "What are the alternatives?".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Cards {
                columns: 2,
                cards: vec![
                    Card::new("Hosted code agents", "Limited context").emphasis(Emphasis::Dimmed),
                    Card::new("Search-giant CLIs", "Inconsistent results").emphasis(Emphasis::Dimmed),
                ],
            })
            .block(Block::Body {
                text: "+ 10 more: completions, IDE bots, cloud pairers...".into(),
                large: false,
            })
            .block(Block::Cards {
                columns: 1,
                cards: vec![
                    Card::new("None of them kept up", "Not even close, as of mid-2025")
                        .emphasis(Emphasis::Warning),
                ],
            }),
        Slide::new("The new architect skillset")
            .block(Block::Heading {
                text: "The New Architect Skillset".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Cards {
                columns: 3,
                cards: vec![
                    Card::new("System Design", "Distributed · Scalable · Resilient"),
                    Card::new("AI Integration", "Prompting · Model Selection"),
                    Card::new("Business Strategy", "Product Vision · Tech Leadership"),
                ],
            }),
        Slide::new("Closing")
            .block(Block::Heading {
                text: "The future belongs to architects, not coders".into(),
                emphasis: Emphasis::Normal,
            })
            .block(Block::Contact {
                lines: vec![
                    "Jordan Fischer".into(),
                    "linkedin.com/in/jordan-fischer-arch".into(),
                    "jordan@architects-lead.dev".into(),
                    "architects-lead.dev".into(),
                ],
            })
            .block(Block::SponsorStrip {
                path: img("sponsors.png"),
            })
            .notes("Leave the contact lines up during questions."),
    ])
}
