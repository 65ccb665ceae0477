//! Tile content
//!
//! The layout engine only knows `ContentLookup`: given a cell, return what
//! goes in it (or nothing, for a filler tile). The tables below are the
//! site's own entries for each page.

use serde::{Deserialize, Serialize};

use crate::pages::PageKind;

/// What clicking a tile does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileAction {
    /// Go to another page of the site
    Navigate(String),
    /// Open an external URL in a new tab
    External(String),
    /// Download a resume file from the assets folder
    Download(String),
    /// Compose an email; the draft is prefilled when subject/body are set
    Email(MailDraft),
}

/// A prefilled email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailDraft {
    pub to: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl MailDraft {
    /// Empty draft to `to`
    pub fn to(address: impl Into<String>) -> Self {
        Self {
            to: address.into(),
            subject: None,
            body: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// `mailto:` URL with the subject and body percent-encoded
    pub fn mailto_url(&self) -> String {
        let params: Vec<String> = [("subject", &self.subject), ("body", &self.body)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|v| format!("{}={}", key, urlencoding::encode(v)))
            })
            .collect();

        if params.is_empty() {
            format!("mailto:{}", self.to)
        } else {
            format!("mailto:{}?{}", self.to, params.join("&"))
        }
    }
}

/// Content shown inside one tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub title: String,
    /// Secondary line (tech stack, stat value, timeline event)
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub icon: String,
    /// Accent colour, `#rrggbb`
    pub color: String,
    /// Progress bar fill, 0..=100
    #[serde(default)]
    pub progress: Option<u8>,
    /// Skill level or star rating, out of 5
    #[serde(default)]
    pub level: Option<f32>,
    #[serde(default)]
    pub action: Option<TileAction>,
}

impl ContentRecord {
    pub fn new(
        title: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            description: None,
            icon: icon.into(),
            color: color.into(),
            progress: None,
            level: None,
            action: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress.min(100));
        self
    }

    pub fn with_level(mut self, level: f32) -> Self {
        self.level = Some(level.clamp(0.0, 5.0));
        self
    }

    pub fn with_action(mut self, action: TileAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Darker shade of the accent colour for the icon gradient
    pub fn gradient_end(&self) -> String {
        adjust_color(&self.color, -20)
    }
}

/// Lighten (positive) or darken (negative) a `#rrggbb` colour by a
/// percentage of full scale. Unparseable input is returned unchanged.
pub fn adjust_color(color: &str, percent: i32) -> String {
    let hex = color.trim_start_matches('#');
    let Ok(num) = u32::from_str_radix(hex, 16) else {
        return color.to_string();
    };
    if hex.len() != 6 {
        return color.to_string();
    }

    let amount = (2.55 * percent as f32).round() as i32;
    let shift = |channel: u32| ((channel & 0xff) as i32 + amount).clamp(0, 255) as u32;
    let (r, g, b) = (shift(num >> 16), shift(num >> 8), shift(num));
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Source of tile content for a grid
pub trait ContentLookup {
    fn lookup(&self, row: u32, col: u32) -> Option<ContentRecord>;
}

impl<F> ContentLookup for F
where
    F: Fn(u32, u32) -> Option<ContentRecord>,
{
    fn lookup(&self, row: u32, col: u32) -> Option<ContentRecord> {
        self(row, col)
    }
}

/// Static table row: (title, subtitle, description, icon, color)
type Entry = (&'static str, &'static str, &'static str, &'static str, &'static str);

fn record(entry: &Entry) -> ContentRecord {
    let (title, subtitle, description, icon, color) = *entry;
    let mut record = ContentRecord::new(title, icon, color);
    if !subtitle.is_empty() {
        record = record.with_subtitle(subtitle);
    }
    if !description.is_empty() {
        record = record.with_description(description);
    }
    record
}

/// Content tables for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    page: PageKind,
}

impl PageContent {
    pub fn new(page: PageKind) -> Self {
        Self { page }
    }
}

impl ContentLookup for PageContent {
    fn lookup(&self, row: u32, col: u32) -> Option<ContentRecord> {
        match self.page {
            PageKind::Home => home(row, col),
            PageKind::Projects => projects(row, col),
            PageKind::Skills => skills(row, col),
            PageKind::Resume => resume(row, col),
            PageKind::Dsa => dsa(row, col),
        }
    }
}

pub const CONTACT_EMAIL: &str = "vatsalgoyal9999@gmail.com";

const FEEDBACK_BODY: &str =
    "I came from the portfolio's resume section and I have feedback for you:\n\n";

fn home(row: u32, col: u32) -> Option<ContentRecord> {
    let nav = |title: &str, icon: &str, color: &str, action: TileAction| {
        Some(ContentRecord::new(title, icon, color).with_action(action))
    };
    let page = |name: &str| TileAction::Navigate(name.to_string());

    match (row, col) {
        (1, 2) => nav(
            "Github",
            "🐙",
            "#333333",
            TileAction::External("https://github.com/".into()),
        ),
        (1, 3) => nav("Live Projects", "🚀", "#667eea", page("projects.html")),
        (1, 4) => nav(
            "LinkedIn",
            "💼",
            "#0077b5",
            TileAction::External("https://www.linkedin.com/".into()),
        ),
        (2, 2) => nav("Download Resume", "📄", "#34a853", page("resumes.html")),
        (2, 3) => nav("Skills & Journey", "🎯", "#ff6b6b", page("skills.html")),
        (2, 4) => nav("DSA Stats", "📊", "#4ecdc4", page("dsa.html")),
        (2, 5) => nav(
            "Mail Me!",
            "✉️",
            "#feca57",
            TileAction::Email(MailDraft::to(CONTACT_EMAIL)),
        ),
        _ => None,
    }
}

const PROJECTS: [Entry; 14] = [
    (
        "E-Commerce Platform",
        "React, Node.js, MongoDB",
        "Full-stack marketplace with payment integration",
        "🛒",
        "#667eea",
    ),
    (
        "Task Manager App",
        "Vue.js, Firebase",
        "Collaborative project management tool",
        "✅",
        "#764ba2",
    ),
    (
        "Weather Dashboard",
        "JavaScript, API",
        "Real-time weather data visualization",
        "🌤️",
        "#f093fb",
    ),
    ("Chat Application", "Socket.io, Express", "Real-time messaging platform", "💬", "#4facfe"),
    (
        "Portfolio Website",
        "HTML, CSS, JS",
        "Interactive hexagonal portfolio design",
        "🎨",
        "#43e97b",
    ),
    ("Data Visualizer", "D3.js, Python", "Interactive charts and analytics", "📊", "#fa709a"),
    ("Mobile Game", "React Native", "Cross-platform puzzle game", "🎮", "#fee140"),
    ("Blog Platform", "Next.js, Prisma", "Modern CMS with markdown support", "📝", "#a8edea"),
    ("AI Chatbot", "Python, TensorFlow", "Natural language processing bot", "🤖", "#d299c2"),
    ("Music Player", "React, Web Audio API", "Streaming music application", "🎵", "#89f7fe"),
    ("Fitness Tracker", "Flutter, SQLite", "Health and workout monitoring", "💪", "#667eea"),
    ("Recipe Finder", "Angular, REST API", "Ingredient-based recipe search", "🍳", "#764ba2"),
    (
        "Social Network",
        "Django, PostgreSQL",
        "Community platform with real-time feeds",
        "👥",
        "#ff6b6b",
    ),
    ("Crypto Tracker", "React, Chart.js", "Cryptocurrency portfolio manager", "₿", "#4ecdc4"),
];

const CERTIFICATIONS: [Entry; 14] = [
    (
        "AWS Certified",
        "Cloud Solutions Architect",
        "Professional level certification",
        "☁️",
        "#ff9500",
    ),
    ("Google Cloud", "Professional Developer", "Advanced cloud development", "🌐", "#4285f4"),
    ("Microsoft Azure", "DevOps Engineer", "CI/CD and automation expert", "⚡", "#0078d4"),
    ("Docker Certified", "Container Specialist", "Containerization expertise", "🐳", "#2496ed"),
    ("Kubernetes", "Application Developer", "Orchestration and scaling", "⚙️", "#326ce5"),
    ("MongoDB", "Database Administrator", "NoSQL database management", "🍃", "#47a248"),
    ("React Certified", "Frontend Specialist", "Modern UI development", "⚛️", "#61dafb"),
    ("Node.js Expert", "Backend Developer", "Server-side JavaScript", "🟢", "#339933"),
    ("Python Institute", "PCAP Certified", "Programming fundamentals", "🐍", "#3776ab"),
    ("Scrum Master", "Agile Methodology", "Project management", "🎯", "#ff6b35"),
    ("Cybersecurity", "CompTIA Security+", "Information security", "🔒", "#e74c3c"),
    ("Machine Learning", "TensorFlow Certified", "AI and deep learning", "🧠", "#ff6f00"),
    ("DevOps Foundation", "ITIL Certified", "IT service management", "🔄", "#2ecc71"),
    ("Blockchain", "Ethereum Developer", "Smart contract development", "⛓️", "#627eea"),
];

fn projects(row: u32, col: u32) -> Option<ContentRecord> {
    let table: &[Entry] = if row == 1 { &PROJECTS } else { &CERTIFICATIONS };
    Some(record(&table[col as usize % table.len()]))
}

/// (title, level, description, icon, color)
const SKILLS: [(&str, f32, &str, &str, &str); 18] = [
    ("Python", 5.0, "Data Science & Backend", "🐍", "#3776ab"),
    ("JavaScript", 5.0, "Full-stack Development", "⚡", "#f7df1e"),
    ("React", 5.0, "Frontend Framework", "⚛️", "#61dafb"),
    ("Node.js", 4.0, "Backend Runtime", "🟢", "#339933"),
    ("MongoDB", 4.0, "NoSQL Database", "🍃", "#47a248"),
    ("Docker", 4.0, "Containerization", "🐳", "#2496ed"),
    ("AWS", 3.0, "Cloud Services", "☁️", "#ff9900"),
    ("Git", 5.0, "Version Control", "📝", "#f05032"),
    ("TypeScript", 4.0, "Type-safe JavaScript", "🔷", "#3178c6"),
    ("Java", 4.0, "Enterprise Applications", "☕", "#ed8b00"),
    ("Linux", 4.0, "System Administration", "🐧", "#fcc624"),
    ("SQL", 4.0, "Database Queries", "🗃️", "#336791"),
    ("Vue.js", 3.0, "Progressive Framework", "💚", "#4fc08d"),
    ("Express", 4.0, "Web Framework", "🚀", "#68a063"),
    ("Redis", 3.0, "In-memory Database", "🔴", "#dc382d"),
    ("GraphQL", 3.0, "Query Language", "🔗", "#e10098"),
    ("Kubernetes", 2.0, "Container Orchestration", "⚙️", "#326ce5"),
    ("Firebase", 4.0, "Backend as a Service", "🔥", "#ffca28"),
];

const TIMELINE: [Entry; 18] = [
    ("2020", "Started Coding", "First Python program", "🚀", "#4caf50"),
    ("2021", "Web Development", "HTML, CSS, JavaScript", "🌐", "#2196f3"),
    ("2022", "Full-stack Projects", "MERN Stack mastery", "💻", "#ff9800"),
    ("2023", "Cloud & DevOps", "AWS, Docker, CI/CD", "☁️", "#9c27b0"),
    ("2024", "AI/ML Focus", "Machine Learning", "🤖", "#e91e63"),
    ("2025", "Senior Developer", "Leadership & Mentoring", "👑", "#ffd700"),
    ("AWS Certified", "Cloud Solutions", "Professional level cert", "☁️", "#ff9500"),
    ("Google Cloud", "Professional Dev", "Advanced cloud dev", "🌐", "#4285f4"),
    ("Docker Certified", "Container Expert", "Containerization pro", "🐳", "#2496ed"),
    ("React Certified", "Frontend Expert", "Modern UI development", "⚛️", "#61dafb"),
    ("Node.js Expert", "Backend Master", "Server-side JavaScript", "🟢", "#339933"),
    ("Scrum Master", "Agile Expert", "Project management", "🎯", "#ff6b35"),
    ("Leadership", "Team Management", "Leading development teams", "👥", "#4ecdc4"),
    ("Communication", "Technical Writing", "Documentation expert", "💬", "#45b7d1"),
    ("Problem Solving", "Analytical Mind", "Complex problem solver", "🧩", "#f093fb"),
    ("UI/UX Design", "User Experience", "Design thinking", "🎨", "#96ceb4"),
    ("Mentoring", "Knowledge Share", "Teaching and guiding", "🎓", "#feca57"),
    ("Open Source", "Community Work", "Contributing to projects", "🔓", "#00bcd4"),
];

fn skills(row: u32, col: u32) -> Option<ContentRecord> {
    if row == 1 {
        let (title, level, description, icon, color) = SKILLS[col as usize % SKILLS.len()];
        Some(
            ContentRecord::new(title, icon, color)
                .with_subtitle(format!("Level {}/5", level))
                .with_description(description)
                .with_level(level),
        )
    } else {
        Some(record(&TIMELINE[col as usize % TIMELINE.len()]))
    }
}

/// (cell, domain, description, file, stars, icon, color)
const RESUMES: [((u32, u32), &str, &str, &str, f32, &str, &str); 8] = [
    ((1, 1), "Basic Resume", "General purpose resume", "Basic.pdf", 0.0, "📄", "#667eea"),
    (
        (1, 2),
        "Full Stack Development",
        "Frontend, Backend & Databases",
        "Full Stack.pdf",
        4.0,
        "💻",
        "#4ecdc4",
    ),
    ((1, 3), "SDE", "Software Development Engineer", "SDE.pdf", 3.5, "🎯", "#ff6b6b"),
    (
        (1, 4),
        "ML Engineer / Data Scientist",
        "Machine Learning & AI",
        "ML: AI.pdf",
        3.5,
        "📈",
        "#feca57",
    ),
    (
        (1, 5),
        "Mobile Developer",
        "iOS & Android Apps",
        "Mobile Developer.pdf",
        3.0,
        "📱",
        "#a8e6cf",
    ),
    (
        (2, 2),
        "Embedded Systems",
        "Firmware & Microcontrollers",
        "Embedded Systems.pdf",
        3.0,
        "🔌",
        "#ff9ff3",
    ),
    (
        (2, 3),
        "Quant Developer",
        "Financial Engineering",
        "Quant Developer.pdf",
        3.0,
        "💲",
        "#54a0ff",
    ),
    (
        (2, 4),
        "CyberSecurity",
        "Security & Compliance",
        "CyberSecurity.pdf",
        3.0,
        "🛡️",
        "#5f27cd",
    ),
];

fn resume(row: u32, col: u32) -> Option<ContentRecord> {
    if (row, col) == (2, 5) {
        return Some(
            ContentRecord::new("Feedback", "✉️", "#00d2d3")
                .with_description("Share your thoughts")
                .with_action(TileAction::Email(
                    MailDraft::to(CONTACT_EMAIL)
                        .with_subject("Portfolio Feedback")
                        .with_body(FEEDBACK_BODY),
                )),
        );
    }

    RESUMES
        .iter()
        .find(|entry| entry.0 == (row, col))
        .map(|&(_, domain, description, file, stars, icon, color)| {
            let mut record = ContentRecord::new(domain, icon, color)
                .with_description(description)
                .with_action(TileAction::Download(file.to_string()));
            if stars > 0.0 {
                record = record.with_level(stars);
            }
            record
        })
}

/// (title, value, description, icon, color, progress)
const DSA: [[(&str, &str, &str, &str, &str, u8); 6]; 4] = [
    [
        ("LeetCode", "450+", "Problems solved", "🔥", "#ff6b35", 0),
        ("Contest Rating", "1847", "Peak rating", "🏆", "#ffa726", 0),
        ("CodeChef", "3★", "Star rating", "⭐", "#66bb6a", 0),
        ("HackerRank", "5★", "Gold badges", "🥇", "#ffd54f", 0),
        ("Global Rank", "Top 5%", "Competitive coding", "🌍", "#42a5f5", 0),
        ("Streak", "120+", "Days active", "⚡", "#ab47bc", 0),
    ],
    [
        ("Easy", "200+", "Problems solved", "🟢", "#4caf50", 85),
        ("Medium", "180+", "Problems solved", "🟡", "#ff9800", 70),
        ("Hard", "70+", "Problems solved", "🔴", "#f44336", 45),
        ("Arrays", "95%", "Mastery level", "📊", "#2196f3", 95),
        ("Trees/Graphs", "88%", "Mastery level", "🌳", "#4caf50", 88),
        ("Dynamic Programming", "82%", "Mastery level", "🧩", "#9c27b0", 82),
    ],
    [
        ("Strings", "90%", "Mastery level", "📝", "#ff5722", 90),
        ("Linked Lists", "92%", "Mastery level", "🔗", "#607d8b", 92),
        ("Stack/Queue", "85%", "Mastery level", "📚", "#795548", 85),
        ("Sorting", "96%", "Mastery level", "🔄", "#009688", 96),
        ("Binary Search", "87%", "Mastery level", "🎯", "#3f51b5", 87),
        ("Greedy", "78%", "Mastery level", "💰", "#8bc34a", 78),
    ],
    [
        ("Contests", "50+", "Participated", "🎪", "#e91e63", 0),
        ("Hackathons", "12+", "Won prizes", "🏅", "#ff6f00", 0),
        ("Open Source", "25+", "Contributions", "🔓", "#00bcd4", 0),
        ("Code Reviews", "100+", "Completed", "👁️", "#673ab7", 0),
        ("Mentoring", "30+", "Students helped", "🎓", "#ff9800", 0),
        ("Study Time", "500+", "Hours invested", "⏰", "#4caf50", 0),
    ],
];

fn dsa(row: u32, col: u32) -> Option<ContentRecord> {
    let &(title, value, description, icon, color, progress) =
        DSA.get(row as usize)?.get(col as usize)?;
    let mut record = ContentRecord::new(title, icon, color)
        .with_subtitle(value)
        .with_description(description);
    if progress > 0 {
        record = record.with_progress(progress);
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_color() {
        assert_eq!(adjust_color("#667eea", -20), "#334bb7");
        assert_eq!(adjust_color("#000000", -20), "#000000");
        assert_eq!(adjust_color("#ffffff", 20), "#ffffff");
        assert_eq!(adjust_color("not-a-color", -20), "not-a-color");
    }

    #[test]
    fn test_home_navigation_tiles() {
        let content = PageContent::new(PageKind::Home);
        let projects = content.lookup(1, 3).unwrap();
        assert_eq!(projects.title, "Live Projects");
        assert_eq!(
            projects.action,
            Some(TileAction::Navigate("projects.html".into()))
        );
        // Filler tile
        assert!(content.lookup(0, 1).is_none());
    }

    #[test]
    fn test_projects_rows_cycle() {
        let content = PageContent::new(PageKind::Projects);
        assert_eq!(content.lookup(1, 0).unwrap().title, "E-Commerce Platform");
        assert_eq!(content.lookup(1, 14).unwrap().title, "E-Commerce Platform");
        assert_eq!(content.lookup(0, 1).unwrap().title, "Google Cloud");
        assert_eq!(content.lookup(2, 1).unwrap().title, "Google Cloud");
    }

    #[test]
    fn test_skill_levels() {
        let content = PageContent::new(PageKind::Skills);
        let k8s = content.lookup(1, 16).unwrap();
        assert_eq!(k8s.level, Some(2.0));
        assert_eq!(k8s.subtitle.as_deref(), Some("Level 2/5"));
        assert!(content.lookup(0, 0).unwrap().level.is_none());
    }

    #[test]
    fn test_resume_actions() {
        let content = PageContent::new(PageKind::Resume);
        let sde = content.lookup(1, 3).unwrap();
        assert_eq!(sde.action, Some(TileAction::Download("SDE.pdf".into())));
        assert_eq!(sde.level, Some(3.5));
        let feedback = content.lookup(2, 5).unwrap();
        let Some(TileAction::Email(draft)) = feedback.action else {
            panic!("feedback tile should compose an email");
        };
        assert_eq!(
            draft.mailto_url(),
            format!(
                "mailto:{}?subject=Portfolio%20Feedback&body=I%20came%20from%20the%20portfolio%27s\
                 %20resume%20section%20and%20I%20have%20feedback%20for%20you%3A%0A%0A",
                CONTACT_EMAIL
            )
        );
        assert!(content.lookup(0, 0).is_none());
    }

    #[test]
    fn test_home_mail_tile_is_plain() {
        let content = PageContent::new(PageKind::Home);
        let mail = content.lookup(2, 5).unwrap();
        let Some(TileAction::Email(draft)) = mail.action else {
            panic!("mail tile should compose an email");
        };
        assert!(draft.body.is_none());
        assert_eq!(draft.mailto_url(), format!("mailto:{}", CONTACT_EMAIL));
    }

    #[test]
    fn test_dsa_progress() {
        let content = PageContent::new(PageKind::Dsa);
        assert_eq!(content.lookup(1, 3).unwrap().progress, Some(95));
        assert_eq!(content.lookup(0, 0).unwrap().progress, None);
        assert!(content.lookup(4, 0).is_none());
        assert!(content.lookup(0, 6).is_none());
    }
}
