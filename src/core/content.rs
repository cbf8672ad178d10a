//! # Site Content
//!
//! Inert sample data shown on the pages. Nothing here is logic: the lists are
//! rendered as they are, filtered only by `CategoryFilter`.
//!
//! Some labels come from the translation tables and some are fixed English
//! text; `Label` keeps the two apart so the renderer knows which to look up.

use chrono::NaiveDate;

use crate::core::page::Page;
use crate::core::widgets::filter::Categorized;

/// A display label: either a translation key or fixed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Key(&'static str),
    Literal(&'static str),
}

/// Calendar date kept as plain numbers so the tables stay `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Day {
    const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Long form, e.g. "January 15, 2024".
    pub fn long(self) -> String {
        match self.to_date() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => format!("{}-{:02}-{:02}", self.year, self.month, self.day),
        }
    }

    /// ISO form, e.g. "2024-01-15".
    pub fn iso(self) -> String {
        format!("{}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Calendar badge parts, e.g. ("FEB", "1").
    pub fn badge(self) -> (String, String) {
        match self.to_date() {
            Some(date) => (
                date.format("%b").to_string().to_uppercase(),
                date.format("%-d").to_string(),
            ),
            None => (String::from("---"), self.day.to_string()),
        }
    }
}

// ============================================================================
// Home
// ============================================================================

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label_key: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: 15, suffix: "+", label_key: "stats.programs" },
    Stat { value: 5000, suffix: "+", label_key: "stats.students" },
    Stat { value: 300, suffix: "+", label_key: "stats.faculty" },
    Stat { value: 50, suffix: "+", label_key: "stats.countries" },
];

pub struct NewsTeaser {
    pub title: &'static str,
    pub date: Day,
    pub image: &'static str,
    pub featured: bool,
}

pub static HOME_NEWS: [NewsTeaser; 4] = [
    NewsTeaser {
        title: "JIU Hosts International Academic Conference 2024",
        date: Day::new(2024, 1, 15),
        image: "/news-1.jpg",
        featured: true,
    },
    NewsTeaser {
        title: "Scholarship Awards Ceremony Celebrates Excellence",
        date: Day::new(2024, 1, 10),
        image: "/news-2.jpg",
        featured: false,
    },
    NewsTeaser {
        title: "New Student Housing Complex Opens",
        date: Day::new(2024, 1, 5),
        image: "/news-3.jpg",
        featured: false,
    },
    NewsTeaser {
        title: "Cultural Festival Brings Global Community Together",
        date: Day::new(2024, 1, 1),
        image: "/news-4.jpg",
        featured: false,
    },
];

pub struct CampusSlide {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static CAMPUS_SLIDES: [CampusSlide; 4] = [
    CampusSlide {
        image: "/campus-1.jpg",
        title: "Graduation Ceremony",
        description: "Celebrating our graduates success",
    },
    CampusSlide {
        image: "/campus-2.jpg",
        title: "University Library",
        description: "State-of-the-art learning facilities",
    },
    CampusSlide {
        image: "/campus-3.jpg",
        title: "Research Laboratories",
        description: "Cutting-edge research equipment",
    },
    CampusSlide {
        image: "/campus-4.jpg",
        title: "Sports Complex",
        description: "Modern athletic facilities",
    },
];

/// Audience tabs of the quick-links section: (id, label key).
pub static AUDIENCES: [(&str, &str); 4] = [
    ("prospective", "quickLinks.types.prospective"),
    ("current", "quickLinks.types.current"),
    ("faculty", "quickLinks.types.faculty"),
    ("alumni", "quickLinks.types.alumni"),
];

pub const DEFAULT_AUDIENCE: &str = "prospective";

pub struct QuickLink {
    pub audience: &'static str,
    pub target: Page,
    pub label: Label,
}

impl Categorized for QuickLink {
    fn category(&self) -> &str {
        self.audience
    }
}

const fn quick(audience: &'static str, target: Page, label: Label) -> QuickLink {
    QuickLink { audience, target, label }
}

pub static QUICK_LINKS: [QuickLink; 16] = [
    quick("prospective", Page::Admissions, Label::Key("quickLinks.links.admissions")),
    quick("prospective", Page::Academics, Label::Key("quickLinks.links.programs")),
    quick("prospective", Page::Scholarships, Label::Key("quickLinks.links.scholarships")),
    quick("prospective", Page::StudentLife, Label::Key("quickLinks.links.housing")),
    quick("current", Page::Admissions, Label::Key("quickLinks.links.portal")),
    quick("current", Page::Academics, Label::Key("quickLinks.links.library")),
    quick("current", Page::Academics, Label::Key("quickLinks.links.calendar")),
    quick("current", Page::Academics, Label::Key("quickLinks.links.career")),
    quick("faculty", Page::Admissions, Label::Key("quickLinks.links.portal")),
    quick("faculty", Page::Academics, Label::Literal("Research")),
    quick("faculty", Page::Academics, Label::Key("quickLinks.links.calendar")),
    quick("faculty", Page::Academics, Label::Key("quickLinks.links.career")),
    quick("alumni", Page::Academics, Label::Key("quickLinks.links.career")),
    quick("alumni", Page::Academics, Label::Key("quickLinks.links.programs")),
    quick("alumni", Page::News, Label::Literal("Alumni News")),
    quick("alumni", Page::Contact, Label::Literal("Stay Connected")),
];

// ============================================================================
// News
// ============================================================================

/// News filter tabs: (id, label). `all` is the no-filter sentinel.
pub static NEWS_CATEGORIES: [(&str, &str); 5] = [
    ("all", "All News"),
    ("academic", "Academic"),
    ("events", "Events"),
    ("research", "Research"),
    ("campus", "Campus"),
];

pub struct NewsArticle {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub date: Day,
    pub author: &'static str,
    pub category: &'static str,
}

impl Categorized for NewsArticle {
    fn category(&self) -> &str {
        self.category
    }
}

pub static NEWS_ARTICLES: [NewsArticle; 6] = [
    NewsArticle {
        id: 1,
        title: "JIU Hosts International Academic Conference 2024",
        excerpt: "Leading researchers from around the world gathered at JIU to discuss the latest developments in science and technology.",
        image: "news-1.jpg",
        date: Day::new(2024, 1, 15),
        author: "University Communications",
        category: "academic",
    },
    NewsArticle {
        id: 2,
        title: "Scholarship Awards Ceremony Celebrates Excellence",
        excerpt: "Over 200 students received merit-based scholarships recognizing their outstanding academic achievements.",
        image: "news-2.jpg",
        date: Day::new(2024, 1, 10),
        author: "Financial Aid Office",
        category: "events",
    },
    NewsArticle {
        id: 3,
        title: "New Student Housing Complex Opens",
        excerpt: "State-of-the-art residence hall provides modern amenities for 1,000 students.",
        image: "news-3.jpg",
        date: Day::new(2024, 1, 5),
        author: "Facilities Management",
        category: "campus",
    },
    NewsArticle {
        id: 4,
        title: "Cultural Festival Brings Global Community Together",
        excerpt: "Students from 50 countries showcased their traditions at the annual International Culture Day.",
        image: "news-4.jpg",
        date: Day::new(2024, 1, 1),
        author: "Student Affairs",
        category: "events",
    },
    NewsArticle {
        id: 5,
        title: "Breakthrough Research in Renewable Energy",
        excerpt: "JIU researchers develop new solar panel technology with 30% increased efficiency.",
        image: "/campus-3.jpg",
        date: Day::new(2023, 12, 28),
        author: "Research Office",
        category: "research",
    },
    NewsArticle {
        id: 6,
        title: "Partnership with Leading Tech Companies",
        excerpt: "New industry collaborations create internship opportunities for engineering students.",
        image: "/campus-2.jpg",
        date: Day::new(2023, 12, 20),
        author: "Career Services",
        category: "academic",
    },
];

pub struct Event {
    pub title: &'static str,
    pub date: Day,
    pub time: &'static str,
    pub location: &'static str,
}

pub static UPCOMING_EVENTS: [Event; 4] = [
    Event {
        title: "Spring Semester Orientation",
        date: Day::new(2024, 2, 1),
        time: "9:00 AM - 4:00 PM",
        location: "Main Auditorium",
    },
    Event {
        title: "Career Fair 2024",
        date: Day::new(2024, 2, 15),
        time: "10:00 AM - 5:00 PM",
        location: "Student Center",
    },
    Event {
        title: "Research Symposium",
        date: Day::new(2024, 3, 5),
        time: "1:00 PM - 6:00 PM",
        location: "Science Building",
    },
    Event {
        title: "Alumni Networking Night",
        date: Day::new(2024, 3, 20),
        time: "6:00 PM - 9:00 PM",
        location: "University Hall",
    },
];

// ============================================================================
// About
// ============================================================================

/// Generic title + description card.
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub static CORE_VALUES: [Card; 4] = [
    Card { title: "Excellence", description: "Striving for the highest standards in education and research" },
    Card { title: "Innovation", description: "Embracing new ideas and technologies to advance knowledge" },
    Card { title: "Diversity", description: "Creating an inclusive environment for all backgrounds" },
    Card { title: "Integrity", description: "Upholding ethical standards in all our endeavors" },
];

pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

pub static TIMELINE: [Milestone; 7] = [
    Milestone { year: 1995, title: "Foundation", description: "Jojet International University was established with a vision to transform education" },
    Milestone { year: 2000, title: "First Graduation", description: "Our first cohort of students graduated, marking a significant milestone" },
    Milestone { year: 2005, title: "Expansion", description: "Opened the East Campus to accommodate growing student population" },
    Milestone { year: 2010, title: "Research Center", description: "Established the Center for Advanced Research and Innovation" },
    Milestone { year: 2015, title: "International Recognition", description: "Achieved international accreditation and global partnerships" },
    Milestone { year: 2020, title: "Digital Transformation", description: "Launched comprehensive online learning platform" },
    Milestone { year: 2024, title: "Global Leader", description: "Recognized as a leading international university in the region" },
];

pub struct Leader {
    pub name: &'static str,
    pub position: &'static str,
}

pub static LEADERSHIP: [Leader; 4] = [
    Leader { name: "Dr. John Smith", position: "President" },
    Leader { name: "Dr. Sarah Johnson", position: "Vice President for Academic Affairs" },
    Leader { name: "Prof. Michael Chen", position: "Vice President for Research" },
    Leader { name: "Dr. Emily Davis", position: "Vice President for Student Affairs" },
];

// ============================================================================
// Academics
// ============================================================================

pub struct Program {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub static UNDERGRADUATE_PROGRAMS: [Program; 6] = [
    Program { name: "Computer Science", duration: "4 years", description: "Develop expertise in software engineering, AI, and data science" },
    Program { name: "Business Administration", duration: "4 years", description: "Build skills in management, finance, and entrepreneurship" },
    Program { name: "Mechanical Engineering", duration: "4 years", description: "Master engineering principles and modern manufacturing" },
    Program { name: "Medicine", duration: "6 years", description: "Comprehensive medical education with clinical training" },
    Program { name: "Law", duration: "4 years", description: "Study legal systems and develop analytical skills" },
    Program { name: "International Relations", duration: "4 years", description: "Explore global politics, diplomacy, and economics" },
];

pub static GRADUATE_PROGRAMS: [Program; 4] = [
    Program { name: "MBA", duration: "2 years", description: "Advanced business management and leadership training" },
    Program { name: "MSc Computer Science", duration: "2 years", description: "Specialized study in advanced computing topics" },
    Program { name: "MSc Engineering", duration: "2 years", description: "Deep dive into engineering research and innovation" },
    Program { name: "PhD Programs", duration: "3-4 years", description: "Doctoral research across various disciplines" },
];

pub static RESEARCH_AREAS: [&str; 6] = [
    "Artificial Intelligence & Machine Learning",
    "Sustainable Energy Solutions",
    "Biomedical Research",
    "Economic Development",
    "Social Innovation",
    "Climate Change Studies",
];

// ============================================================================
// Admissions
// ============================================================================

pub struct Requirements {
    pub level: &'static str,
    pub items: &'static [Label],
}

pub static REQUIREMENTS: [Requirements; 2] = [
    Requirements {
        level: "Undergraduate",
        items: &[
            Label::Key("pages.admissions.requirements.undergraduate"),
            Label::Literal("Minimum GPA 3.0 or equivalent"),
            Label::Key("pages.admissions.requirements.english"),
            Label::Literal("Letter of recommendation"),
        ],
    },
    Requirements {
        level: "Graduate",
        items: &[
            Label::Key("pages.admissions.requirements.graduate"),
            Label::Literal("Minimum GPA 3.2 in undergraduate studies"),
            Label::Literal("GRE/GMAT scores (if applicable)"),
            Label::Literal("Two letters of recommendation"),
            Label::Literal("Statement of purpose"),
        ],
    },
];

pub struct Deadline {
    pub semester: &'static str,
    pub date: Day,
}

pub static DEADLINES: [Deadline; 2] = [
    Deadline { semester: "Fall Semester 2024", date: Day::new(2024, 7, 15) },
    Deadline { semester: "Spring Semester 2025", date: Day::new(2024, 12, 15) },
];

pub struct Scholarship {
    pub name: &'static str,
    pub coverage: &'static str,
    pub criteria: &'static str,
}

pub static SCHOLARSHIPS: [Scholarship; 4] = [
    Scholarship { name: "Merit Scholarship", coverage: "Up to 100% tuition", criteria: "Outstanding academic achievement" },
    Scholarship { name: "International Student Scholarship", coverage: "50% tuition", criteria: "For international students with excellent records" },
    Scholarship { name: "Research Fellowship", coverage: "Full tuition + stipend", criteria: "For graduate research students" },
    Scholarship { name: "Sports Scholarship", coverage: "Up to 75% tuition", criteria: "Exceptional athletic ability" },
];

// ============================================================================
// Student life
// ============================================================================

pub static FACILITIES: [Card; 6] = [
    Card { title: "Student Housing", description: "Modern dormitories with comfortable living spaces" },
    Card { title: "Dining Halls", description: "Multiple dining options with diverse cuisines" },
    Card { title: "Sports Complex", description: "Gym, swimming pool, and sports fields" },
    Card { title: "High-Speed Internet", description: "Campus-wide WiFi coverage" },
    Card { title: "24/7 Security", description: "Round-the-clock campus security" },
    Card { title: "Health Center", description: "Medical services for students" },
];

pub static HOUSING_FEATURES: [&str; 5] = [
    "Single and shared room options",
    "Fully furnished accommodations",
    "Common areas for socializing",
    "Laundry facilities on-site",
    "Study rooms and quiet spaces",
];

pub struct Club {
    pub name: &'static str,
    pub category: &'static str,
}

impl Categorized for Club {
    fn category(&self) -> &str {
        self.category
    }
}

pub static CLUBS: [Club; 8] = [
    Club { name: "Debate Club", category: "Academic" },
    Club { name: "Robotics Club", category: "Technology" },
    Club { name: "Music Society", category: "Arts" },
    Club { name: "Sports Club", category: "Athletics" },
    Club { name: "Volunteer Group", category: "Community" },
    Club { name: "International Students", category: "Cultural" },
    Club { name: "Photography Club", category: "Arts" },
    Club { name: "Entrepreneurship Club", category: "Business" },
];

pub struct CampusEvent {
    pub title: &'static str,
    pub when: &'static str,
    pub description: &'static str,
}

pub static CAMPUS_EVENTS: [CampusEvent; 4] = [
    CampusEvent { title: "Welcome Week", when: "September 1-7", description: "Orientation activities for new students" },
    CampusEvent { title: "International Culture Day", when: "October 15", description: "Celebrating diversity on campus" },
    CampusEvent { title: "Sports Tournament", when: "November 10-15", description: "Inter-faculty sports competition" },
    CampusEvent { title: "Spring Festival", when: "March 20", description: "Annual campus celebration" },
];

pub static SUPPORT_SERVICES: [Card; 3] = [
    Card { title: "Counseling Services", description: "Professional mental health support for all students" },
    Card { title: "Academic Advising", description: "Guidance for course selection and career planning" },
    Card { title: "Career Services", description: "Job placement and internship opportunities" },
];

// ============================================================================
// Contact
// ============================================================================

/// Subject options of the contact form: (value, label).
pub static CONTACT_SUBJECTS: [(&str, &str); 5] = [
    ("admissions", "Admissions Inquiry"),
    ("programs", "Program Information"),
    ("scholarships", "Scholarships"),
    ("visit", "Campus Visit"),
    ("other", "Other"),
];

pub const OFFICE_HOURS: &str = "Monday - Friday: 8:00 AM - 6:00 PM";

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [Faq; 5] = [
    Faq {
        question: "How do I apply to Jojet International University?",
        answer: "You can apply online through our admissions portal. Complete the application form, submit required documents, and pay the application fee.",
    },
    Faq {
        question: "What are the admission requirements?",
        answer: "Requirements vary by program. Generally, you need a high school diploma for undergraduate programs and a bachelor's degree for graduate programs.",
    },
    Faq {
        question: "Are scholarships available?",
        answer: "Yes, we offer various merit-based and need-based scholarships. Visit our scholarships page for more information.",
    },
    Faq {
        question: "Can international students apply?",
        answer: "Absolutely! We welcome students from all over the world. International students should meet English language requirements.",
    },
    Faq {
        question: "How can I schedule a campus visit?",
        answer: "You can schedule a campus tour by contacting our admissions office or filling out the visit request form on our website.",
    },
];

pub const CONTACT_SUCCESS_TITLE: &str = "Message Sent!";
pub const CONTACT_SUCCESS_BODY: &str = "Thank you for contacting us. We'll get back to you soon.";

pub const NEWSLETTER_TITLE: &str = "Stay Updated";
pub const NEWSLETTER_BODY: &str =
    "Subscribe to our newsletter to receive the latest news, events, and updates from JIU.";

// ============================================================================
// Footer
// ============================================================================

pub const FOOTER_TAGLINE: &str =
    "Excellence in Education, Innovation in Research. Shaping future leaders since 1995.";

pub static FOOTER_LINKS: [(Page, &str); 5] = [
    (Page::About, "About Us"),
    (Page::Academics, "Programs"),
    (Page::Admissions, "Admissions"),
    (Page::News, "News & Events"),
    (Page::Contact, "Contact"),
];

pub static SOCIAL_LINKS: [&str; 5] = ["Facebook", "YouTube", "Instagram", "Twitter", "LinkedIn"];
