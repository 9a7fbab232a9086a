//! Static marketing copy shared by the page renderers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Industry {
    pub key: &'static str,
    pub label: &'static str,
    pub examples: [&'static str; 3],
}

pub const INDUSTRIES: [Industry; 7] = [
    Industry {
        key: "dentists",
        label: "Dentists",
        examples: ["No-shows", "Follow-ups", "Scheduling"],
    },
    Industry {
        key: "doctors",
        label: "Doctors & Clinics",
        examples: ["Check-ins", "Reminders", "Intake"],
    },
    Industry {
        key: "beauty",
        label: "Beauty Clinics & Salons",
        examples: ["Bookings", "After-hours", "Reactivation"],
    },
    Industry {
        key: "electricians",
        label: "Electricians",
        examples: ["Missed calls", "Quotes", "Dispatch"],
    },
    Industry {
        key: "mechanics",
        label: "Mechanics",
        examples: ["Missed calls", "Estimates", "Updates"],
    },
    Industry {
        key: "painters",
        label: "Painters",
        examples: ["Quote intake", "Follow-ups", "Reviews"],
    },
    Industry {
        key: "drivers",
        label: "Drivers & Field Teams",
        examples: ["Routing", "Updates", "Reminders"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct TextBlock {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FOCUS_BLOCKS: [TextBlock; 5] = [
    TextBlock {
        title: "Growth",
        body: "We build systems that help you capture more leads, book more appointments, and scale your operation without adding chaos.",
    },
    TextBlock {
        title: "Peace of mind",
        body: "Don't lose clients because you were busy. Our automations respond instantly and keep people supported — especially in health and care scenarios.",
    },
    TextBlock {
        title: "Time back for your team and your family",
        body: "When follow-ups, confirmations, and routine questions are automated, your team can focus on improving the business — and you get breathing room at home.",
    },
    TextBlock {
        title: "Ambitious ownership",
        body: "Make more money, gain more control, and run like an owner. Systems create leverage — so your growth doesn't depend on you being everywhere.",
    },
    TextBlock {
        title: "Customer service: the hidden growth lever",
        body: "Most businesses never improve because they don't track what went wrong. Our follow-up systems collect feedback, highlight issues, and help you fix them fast.",
    },
];

pub const PROFESSIONALS: [&str; 5] = ["Dentist", "Doctor", "Beauty Pro", "Electrician", "Mechanic"];

pub const TEASER_PROFESSIONALS: [&str; 6] = [
    "Dentist",
    "Doctor",
    "Beauty Pro",
    "Electrician",
    "Mechanic",
    "Driver",
];

/// A home-page tile that jumps into the finder with `need` pre-selected.
#[derive(Debug, Clone, Copy)]
pub struct NeedTile {
    pub title: &'static str,
    pub desc: &'static str,
    pub need: &'static str,
}

pub const NEED_TILES: [NeedTile; 6] = [
    NeedTile {
        title: "Missed calls → instant WhatsApp reply",
        desc: "Recover lost leads automatically and capture details.",
        need: "Missed Calls",
    },
    NeedTile {
        title: "After-hours auto-reply (Busy mode)",
        desc: "Stay responsive when you're offline.",
        need: "After-hours",
    },
    NeedTile {
        title: "Appointment reminders + confirmations",
        desc: "Reduce no-shows with two-way confirmations.",
        need: "Reminders",
    },
    NeedTile {
        title: "Patient / client follow-ups (check-ins)",
        desc: "Keep clients on track and alert staff when needed.",
        need: "Follow-ups",
    },
    NeedTile {
        title: "AI receptionist for calls + chat",
        desc: "Answer FAQs, qualify, route, and escalate to humans.",
        need: "Lead Qualification",
    },
    NeedTile {
        title: "Simple trackers + alerts (Sheets/Airtable)",
        desc: "Stop losing opportunities to lack of visibility.",
        need: "Reporting",
    },
];

pub const HERO_POINTS: [&str; 3] = [
    "Instant replies to missed calls and messages",
    "Reminders, confirmations, and follow-ups that run automatically",
    "Human handoff with clean summaries when needed",
];

pub const WORKFLOW_PREVIEW: [(&str, &str, &str); 3] = [
    ("Step 1", "Missed call detected", "Auto-triggers within seconds."),
    ("Step 2", "WhatsApp message sent", "Collects intent + key details."),
    ("Step 3", "Book / route / escalate", "Booking link or staff handoff."),
];

pub const STEPS: [TextBlock; 3] = [
    TextBlock {
        title: "Pick a need",
        body: "Choose the exact situation you want to fix (missed calls, reminders, follow-ups, etc.).",
    },
    TextBlock {
        title: "Deploy a proven solution",
        body: "We install a ready workflow that fits your industry and tools.",
    },
    TextBlock {
        title: "Measure & optimize",
        body: "Track results and refine to increase conversions and retention.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const PROOF_STATS: [Stat; 4] = [
    Stat {
        label: "Response speed",
        value: "Seconds",
        note: "Auto-replies triggered instantly after missed calls/messages.",
    },
    Stat {
        label: "Bookings recovered",
        value: "↑",
        note: "More clients convert because you respond when competitors don't.",
    },
    Stat {
        label: "No-shows reduced",
        value: "↓",
        note: "Two-way confirmations and smart reminders improve attendance.",
    },
    Stat {
        label: "Staff time saved",
        value: "Hours",
        note: "AI handles repetitive questions and follow-ups.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "We stopped losing patients after hours. The auto-replies capture everything and my staff sees a clean summary.",
        name: "Clinic Owner",
        role: "Dentistry / Clinic",
    },
    Testimonial {
        quote: "No-shows dropped because confirmations are automatic. My team finally focuses on care, not chasing messages.",
        name: "Operations Manager",
        role: "Medical practice",
    },
    Testimonial {
        quote: "I'm a contractor — if I'm on a job, I can't answer. Now I look responsive and I close more work.",
        name: "Owner",
        role: "Field services",
    },
];

pub const FAQS: [TextBlock; 4] = [
    TextBlock {
        title: "Do you work with WhatsApp only, or also SMS and voice?",
        body: "We can do WhatsApp-only, or combine WhatsApp + SMS + voice depending on your needs and your market.",
    },
    TextBlock {
        title: "Can this integrate with my existing tools?",
        body: "Yes. We commonly connect CRMs, calendars, Sheets/Airtable, and custom dashboards. If you already use tools, we adapt.",
    },
    TextBlock {
        title: "Is this only for clinics?",
        body: "No. We focus on service businesses: clinics/dentists, beauty, contractors, and field teams (electricians, mechanics, etc.).",
    },
    TextBlock {
        title: "How fast can I launch something small?",
        body: "Mini offers (like WhatsApp Busy Pack) can be deployed quickly. Major systems take longer based on routing and integrations.",
    },
];

pub const PRINCIPLES: [TextBlock; 4] = [
    TextBlock {
        title: "Need-driven",
        body: "We lead with the client need and the outcome, not the software.",
    },
    TextBlock {
        title: "Fast to deploy",
        body: "Major systems and quick “mini offers” depending on urgency.",
    },
    TextBlock {
        title: "Works with your stack",
        body: "We integrate your CRM, calendar, sheets, and messaging.",
    },
    TextBlock {
        title: "Measured results",
        body: "Dashboards and logs so you can optimize and scale.",
    },
];

pub const TYPICAL_STACK: [&str; 9] = [
    "WhatsApp",
    "SMS",
    "Voice Agents",
    "Make.com",
    "n8n",
    "Zapier",
    "Airtable",
    "Supabase",
    "Dashboards",
];

pub const LEGAL_SECTIONS: [TextBlock; 3] = [
    TextBlock {
        title: "1) Overview",
        body: "Explain what data you collect, how you use it, and what users can expect.",
    },
    TextBlock {
        title: "2) Data & Security",
        body: "Describe storage, access, and best-effort security practices.",
    },
    TextBlock {
        title: "3) Contact",
        body: "Provide a contact email for legal/privacy requests.",
    },
];
