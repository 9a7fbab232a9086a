use crate::catalog::schema::{EmotionalValue, MediaItem, MediaKind, SolutionRecord, Tier};

const ALL_INDUSTRIES: [&str; 9] = [
    "Dentists",
    "Doctors",
    "Beauty Clinics",
    "Beauty Salons",
    "Electricians",
    "Mechanics",
    "Painters",
    "Drivers",
    "Other",
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn image(title: &str, note: &str) -> MediaItem {
    MediaItem::placeholder(MediaKind::Image, title, note)
}

fn video(title: &str, note: &str) -> MediaItem {
    MediaItem::placeholder(MediaKind::Video, title, note)
}

fn emotional(money: &str, freedom: &str, growth: &str, service: &str) -> EmotionalValue {
    EmotionalValue {
        money: money.to_string(),
        freedom: freedom.to_string(),
        growth: growth.to_string(),
        service: service.to_string(),
    }
}

pub fn build_solutions() -> Vec<SolutionRecord> {
    vec![
        missed_call_recovery(),
        reminders_confirmations(),
        ai_receptionist(),
        patient_checkins(),
        whatsapp_busy_pack(),
        sheets_airtable_tracker(),
    ]
}

fn missed_call_recovery() -> SolutionRecord {
    SolutionRecord {
        id: "missed-call-recovery".to_string(),
        tier: Tier::Major,
        title: "Missed-Call Recovery System".to_string(),
        outcome: "Instant WhatsApp/SMS reply after missed calls + capture details + book or route."
            .to_string(),
        industries: strings(&ALL_INDUSTRIES),
        needs: strings(&["Missed Calls", "After-hours", "Lead Qualification"]),
        channels: strings(&["WhatsApp", "SMS", "Voice"]),
        tags: strings(&["Missed Calls", "After-hours", "Lead Qualification"]),
        includes: strings(&[
            "Missed-call trigger + automation",
            "Short intake questions",
            "Routing + escalation with summary",
            "Optional booking link",
        ]),
        how_it_works: strings(&[
            "A missed call triggers an instant WhatsApp/SMS within seconds.",
            "The system asks 3–5 questions to capture intent and details.",
            "Qualified leads get routed to the right person/location automatically.",
            "If a human should take over, it escalates with a clean summary.",
        ]),
        price_label: "Starting at $___".to_string(),
        price_note: "Final price depends on channels + routing complexity.".to_string(),
        emotional: emotional(
            "Recover leads that would have gone to competitors — more booked jobs and more revenue without extra staff.",
            "Even if you miss a call, you still look responsive. Less stress after hours, more time for family.",
            "A reliable intake engine that scales with your team — not with one person's availability.",
            "Clients feel taken care of instantly, which builds trust and increases conversions.",
        ),
        media: vec![
            image("Missed call → WhatsApp reply", "Flow overview"),
            image("Lead capture questions", "Short intake"),
            video("Demo video", "30–60s walkthrough"),
            image("Routing + escalation", "Human handoff"),
        ],
    }
}

fn reminders_confirmations() -> SolutionRecord {
    SolutionRecord {
        id: "reminders-confirmations".to_string(),
        tier: Tier::Major,
        title: "Reminders + Confirmations".to_string(),
        outcome: "Reduce no-shows with confirmations, reschedules, and follow-ups.".to_string(),
        industries: strings(&["Dentists", "Doctors", "Beauty Clinics", "Beauty Salons"]),
        needs: strings(&["Reminders", "Scheduling", "Follow-ups"]),
        channels: strings(&["WhatsApp", "SMS"]),
        tags: strings(&["Reminders", "Scheduling", "Follow-ups"]),
        includes: strings(&[
            "Multi-touch reminders",
            "Confirm/reschedule flows",
            "No-response escalation",
            "Daily summary report",
        ]),
        how_it_works: strings(&[
            "Send reminders at 48h / 24h / same-day.",
            "Clients confirm or reschedule in one tap.",
            "No response triggers follow-up and optional staff alert.",
            "You get a daily summary of risk appointments.",
        ]),
        price_label: "Starting at $___".to_string(),
        price_note: "Depends on calendar/CRM integration and reminder complexity.".to_string(),
        emotional: emotional(
            "Lower no-shows = more revenue from the same schedule (no extra marketing spend).",
            "Your team stops chasing confirmations manually — more time for higher-value tasks.",
            "Scaling locations becomes easier once reminders run automatically.",
            "Clients feel guided and supported, which improves retention and referrals.",
        ),
        media: vec![
            image("Reminder schedule", "48h / 24h / same-day"),
            image("Confirm or reschedule", "Two-way messaging"),
            video("Demo video", "How confirmations work"),
        ],
    }
}

fn ai_receptionist() -> SolutionRecord {
    SolutionRecord {
        id: "ai-receptionist".to_string(),
        tier: Tier::Major,
        title: "AI Receptionist (Voice + Chat)".to_string(),
        outcome: "Answers FAQs, qualifies clients, and escalates to a human when needed."
            .to_string(),
        industries: strings(&[
            "Dentists",
            "Doctors",
            "Beauty Clinics",
            "Beauty Salons",
            "Electricians",
            "Mechanics",
            "Other",
        ]),
        needs: strings(&["FAQ Handling", "Lead Qualification", "Routing"]),
        channels: strings(&["Voice", "WhatsApp", "SMS"]),
        tags: strings(&["FAQ Handling", "Lead Qualification", "Routing"]),
        includes: strings(&[
            "FAQ answers",
            "Qualification questions",
            "Routing rules",
            "Conversation summaries",
        ]),
        how_it_works: strings(&[
            "AI greets the client and identifies intent.",
            "Answers common questions fast and consistently.",
            "Captures details and qualifies where needed.",
            "Escalates to a human with a clean summary.",
        ]),
        price_label: "Starting at $___".to_string(),
        price_note: "Depends on channels + knowledge base size + routing rules.".to_string(),
        emotional: emotional(
            "Convert more inquiries because you respond instantly — higher conversions with the same team.",
            "Fewer interruptions for staff; smoother peak-hour operations.",
            "Consistent front desk experience across multiple locations.",
            "Your client experience improves because answers are fast, consistent, and guided.",
        ),
        media: vec![
            image("AI greeting flow", "Receptionist behavior"),
            video("Demo video", "Voice + WhatsApp handoff"),
            image("Summary to staff", "Clean escalation"),
        ],
    }
}

fn patient_checkins() -> SolutionRecord {
    SolutionRecord {
        id: "patient-checkins".to_string(),
        tier: Tier::Major,
        title: "Patient / Client Check-In Journeys".to_string(),
        outcome: "Automated follow-ups that keep clients on track and alert your team when needed."
            .to_string(),
        industries: strings(&["Dentists", "Doctors", "Beauty Clinics"]),
        needs: strings(&["Follow-ups", "Care Journey", "Escalation"]),
        channels: strings(&["WhatsApp", "SMS"]),
        tags: strings(&["Follow-ups", "Escalation", "Care Journey"]),
        includes: strings(&[
            "Journey schedule",
            "Response logging",
            "Escalation triggers",
            "Basic reporting",
        ]),
        how_it_works: strings(&[
            "After a visit/service, the system schedules check-ins automatically.",
            "Clients reply with simple options (e.g., \"Good\", \"Need help\").",
            "Problems trigger an alert to your staff instantly.",
            "You keep consistent follow-up without manual tracking.",
        ]),
        price_label: "Starting at $___".to_string(),
        price_note: "Depends on number of touchpoints + escalation rules.".to_string(),
        emotional: emotional(
            "Higher retention and referrals because clients feel cared for.",
            "No manual follow-up chaos — the system does it automatically.",
            "Consistent follow-up supports quality at scale.",
            "You detect issues early and protect your reputation.",
        ),
        media: vec![
            image("Day 1 check-in", "Simple options"),
            image("Staff alert", "Escalation trigger"),
            video("Journey demo", "Walkthrough"),
        ],
    }
}

fn whatsapp_busy_pack() -> SolutionRecord {
    SolutionRecord {
        id: "whatsapp-busy-pack".to_string(),
        tier: Tier::Mini,
        title: "WhatsApp Auto-Reply Pack (Busy / After-hours)".to_string(),
        outcome: "Fast setup for auto replies that capture details and set expectations."
            .to_string(),
        industries: strings(&ALL_INDUSTRIES),
        needs: strings(&["After-hours", "Lead Capture"]),
        channels: strings(&["WhatsApp"]),
        tags: strings(&["After-hours", "Lead Capture"]),
        includes: strings(&["Message templates", "Quick flow setup", "Basic routing"]),
        how_it_works: strings(&[
            "We install a ready template for your top questions.",
            "Clients get immediate answers and a short intake.",
            "You receive details organized and ready to act.",
        ]),
        price_label: "Fixed price: $___".to_string(),
        price_note: "Quick setup. Optional upgrades available.".to_string(),
        emotional: emotional(
            "Capture leads you'd normally lose after hours — quick ROI.",
            "Stop worrying about replying instantly; your business stays responsive.",
            "A perfect first step toward a full automation system.",
            "Clients get clarity and next steps, which increases trust.",
        ),
        media: vec![
            image("Busy auto-reply", "Set expectations"),
            video("Quick demo", "Template walkthrough"),
        ],
    }
}

fn sheets_airtable_tracker() -> SolutionRecord {
    SolutionRecord {
        id: "sheets-airtable-tracker".to_string(),
        tier: Tier::Mini,
        title: "Lead Tracker (Google Sheets / Airtable) + Alerts".to_string(),
        outcome: "Simple pipeline tracking + alerts when leads stall or need action.".to_string(),
        industries: strings(&ALL_INDUSTRIES),
        needs: strings(&["Reporting", "Ops Tracking"]),
        channels: strings(&["Internal"]),
        tags: strings(&["Reporting", "Ops Tracking"]),
        includes: strings(&["Tracker setup", "Alert automations", "Basic dashboard view"]),
        how_it_works: strings(&[
            "We create a clean tracker for leads and statuses.",
            "Alerts fire when leads stall or need follow-up.",
            "Your team stays consistent without extra tools.",
        ]),
        price_label: "Fixed price: $___".to_string(),
        price_note: "Perfect for small teams that want clarity fast.".to_string(),
        emotional: emotional(
            "More follow-ups = more closed deals. The tracker prevents leads from silently dying.",
            "Your team knows exactly what to do next without chaos.",
            "Tracking becomes a habit — the foundation for scaling operations.",
            "Consistency improves customer experience and reduces complaints.",
        ),
        media: vec![
            image("Tracker view", "Simple pipeline"),
            image("Alerts", "No more forgotten leads"),
            video("Setup demo", "2–3 min walkthrough"),
        ],
    }
}
