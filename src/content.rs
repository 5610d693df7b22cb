//! Static page content.
//!
//! Every list here is rendered in declaration order; the order is the visual
//! layout order on the page.

pub struct Profile {
    pub logo: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub footer_logo: &'static str,
    pub footer_tagline: &'static str,
    pub copyright: &'static str,
}

pub const PROFILE: Profile = Profile {
    logo: "Sadik.",
    name: "Sadik.",
    subtitle: "A passionate Web Developer who builds modern websites with React & Tailwind.",
    footer_logo: "S A D I K",
    footer_tagline: "Building modern, responsive, and creative websites 🚀",
    copyright: "© 2025 Sadik. All Rights Reserved.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Labels drifting around the hero section.
pub const FLOATING_BADGES: [&str; 8] = [
    "React",
    "Tailwind",
    "JS",
    "Node.js",
    "Spring Boot",
    "Sql",
    "Html",
    "Css",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, 0 to 100.
    pub level: u8,
    pub experience: &'static str,
}

impl Skill {
    /// CSS width of the filled part of the proficiency bar.
    #[must_use]
    pub fn bar_width(&self) -> String {
        format!("{}%", self.level)
    }

    /// Text revealed when hovering the skill card.
    #[must_use]
    pub fn hover_label(&self) -> String {
        format!("{}% - {}", self.level, self.experience)
    }
}

pub const SKILLS: [Skill; 8] = [
    Skill { name: "HTML", level: 90, experience: "3 years experience" },
    Skill { name: "CSS", level: 88, experience: "3 years experience" },
    Skill { name: "JavaScript", level: 85, experience: "2.5 years experience" },
    Skill { name: "React", level: 80, experience: "2 years experience" },
    Skill { name: "Tailwind", level: 82, experience: "1.5 years experience" },
    Skill { name: "Java", level: 78, experience: "2 years experience" },
    Skill { name: "Spring Boot", level: 75, experience: "1.5 years experience" },
    Skill { name: "MySQL", level: 80, experience: "2 years experience" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub live_url: &'static str,
    pub repo_url: &'static str,
    /// Resolved by the static asset server, or an absolute URL.
    pub image: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Gym Website",
        description: "Responsive modern project using latest technologies.",
        live_url: "https://gym-website-eight-gilt.vercel.app/index.html",
        repo_url: "https://github.com/Shaikhsadik90/gym-website.git",
        image: "/gym copy.jpeg",
    },
    Project {
        title: "Tomato Zomato Clone",
        description: "Clean UI/UX with functional search and filters.",
        live_url: "https://food-delivery-app-react-js-brown.vercel.app",
        repo_url: "https://github.com/Shaikhsadik90/Food-Delivery-App-React-JS.git",
        image: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?q=80&w=600",
    },
    Project {
        title: "Learning Stars",
        description: "School and Secondary  Website.",
        live_url: "https://www.learningstarspreschool.com",
        repo_url: "https://github.com/Shaikhsadik90/learning-start.git",
        image: "/WhatsApp1.webp",
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm Jack, a passionate and creative full-stack web developer with a focus on building \
     responsive and visually appealing websites and applications. I specialize in modern \
     front-end technologies like React and Tailwind CSS, and I also have strong experience \
     in back-end development with Node.js, Express, Spring Boot, and relational databases \
     such as MySQL.",
    "I enjoy turning complex ideas into clean, user-friendly solutions and continuously \
     learning new tools and frameworks to improve performance and scalability. Beyond coding, \
     I love designing smooth UI/UX experiences, implementing animations, and optimizing \
     websites for speed and SEO.",
    "My goal is to create impactful digital experiences that not only look great but also \
     deliver real value for users and clients. When I'm not coding, I explore automation, \
     cloud technologies, and contribute to open-source projects.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    /// Font Awesome icon class.
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        href: "https://github.com/",
        icon: "fab fa-github",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/",
        icon: "fab fa-linkedin",
    },
    SocialLink {
        name: "Twitter",
        href: "https://twitter.com/",
        icon: "fab fa-twitter",
    },
];
