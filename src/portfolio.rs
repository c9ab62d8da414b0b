use chrono::{DateTime, Utc};

use crate::typing::TypingConfig;

pub const OWNER_NAME: &str = "Arunpandian C";
pub const OWNER_TITLE: &str = "Full Stack Developer";
pub const HERO_TAGLINE: &str = "Passionate about building responsive, scalable, and user-focused web applications with clean, efficient code.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "An aspiring full-stack developer with a strong foundation in front-end and back-end technologies. I have a passion for building responsive, scalable, and user-focused web applications.",
    "I am committed to writing clean, efficient code and continuously learning new tools and frameworks. My goal is to deliver seamless user experiences through intuitive interfaces and robust server-side logic to drive functionality, performance, and user satisfaction.",
];

pub const HERO_PHRASES: [&str; 4] = [
    "Full Stack Developer",
    "Python Developer",
    "Frontend Developer",
    "Problem Solver",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavItem {
    /// Section id the link points at, without the leading `#`.
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { href: "#hero", label: "Home" },
    NavItem { href: "#about", label: "About" },
    NavItem { href: "#skills", label: "Skills" },
    NavItem { href: "#education", label: "Education" },
    NavItem { href: "#projects", label: "Projects" },
    NavItem { href: "#experience", label: "Experience" },
    NavItem { href: "#contact", label: "Contact" },
];

/// Look-ahead below the viewport top when deciding which section is in view.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
/// Scroll distance past which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Page geometry of a rendered section, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

/// Section containing the point [`ACTIVE_SECTION_OFFSET`] below `scroll_y`.
///
/// Ranges are half-open, and the last match in document order wins. `None`
/// means no section contains the point; callers keep their previous choice.
pub fn active_section<'a>(scroll_y: f64, sections: &[SectionBounds<'a>]) -> Option<&'a str> {
    let at = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| at >= s.top && at < s.top + s.height)
        .map(|s| s.id)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Frontend",
        skills: &["HTML5", "CSS3", "JavaScript", "Tailwind CSS"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Python"],
    },
    SkillCategory {
        title: "Tools & Platforms",
        skills: &["Git", "GitHub", "VS Code", "Postman", "Vercel", "Cursor"],
    },
    SkillCategory {
        title: "Soft Skills",
        skills: &[
            "Problem Solving",
            "Communication",
            "Team Collaboration",
            "Adaptability",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct EducationItem {
    pub years: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub grade: &'static str,
}

pub const EDUCATION: [EducationItem; 3] = [
    EducationItem {
        years: "2021-2025",
        title: "Bachelor of Technology in CSE",
        institution: "Manakula Vinayagar Institute of Technology",
        location: "Puducherry",
        grade: "CGPA: 7.6",
    },
    EducationItem {
        years: "2020-2021",
        title: "Higher Secondary Course (HSC)",
        institution: "Amalorpavam Higher Secondary School",
        location: "Puducherry",
        grade: "Percentage: 87%",
    },
    EducationItem {
        years: "2018-2019",
        title: "Secondary School Leaving Certificate (SSLC)",
        institution: "Amalorpavam Higher Secondary School",
        location: "Puducherry",
        grade: "Percentage: 82%",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub team_size: u8,
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

pub const PROJECTS: [Project; 2] = [
    Project {
        title: "Vehicle Detection & Identification",
        description: "The project is designed to detect and identify vehicles. It is also used for security purposes by detecting the vehicle's number plate.",
        technologies: &["Python"],
        team_size: 3,
        github_url: None,
        live_url: None,
    },
    Project {
        title: "NFT Certification System",
        description: "A decentralized certification system for digital artwork that uses NFT technology on the Polygon blockchain. The platform ensures authenticity, ownership, and provenance tracking of digital art with tamper-proof NFT certificates.",
        technologies: &["JavaScript", "Solidity"],
        team_size: 3,
        github_url: None,
        live_url: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ExperienceItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

pub const EXPERIENCE: [ExperienceItem; 4] = [
    ExperienceItem {
        icon: "💼",
        title: "Internship",
        description: "Frontend development intern at Tripmilestone Tours Pvt Ltd",
        items: &[],
    },
    ExperienceItem {
        icon: "🏅",
        title: "Certificates",
        description: "",
        items: &["Python (Certiport)", "ICT Learnathon 2023", "Skill-a-thon 2024"],
    },
    ExperienceItem {
        icon: "🎯",
        title: "Achievements",
        description: "Typewriting-Distinction (Senior)",
        items: &[],
    },
    ExperienceItem {
        icon: "⭐",
        title: "Activities",
        description: "Participated in NSS activities like cycle rally and NCC Air Force",
        items: &[],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

impl ContactInfo {
    /// Web links open in a new tab, `tel:`/`mailto:` links don't.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo {
        icon: "📞",
        title: "Phone",
        value: "+91 8072396488",
        href: "tel:+918072396488",
    },
    ContactInfo {
        icon: "📧",
        title: "Email",
        value: "arunpandiancse25@gmail.com",
        href: "mailto:arunpandiancse25@gmail.com",
    },
    ContactInfo {
        icon: "devicon-linkedin-plain",
        title: "LinkedIn",
        value: "linkedin.com/in/arunpandian-c/",
        href: "https://www.linkedin.com/in/arunpandian-c/",
    },
    ContactInfo {
        icon: "devicon-github-plain",
        title: "GitHub",
        value: "github.com/arunpandian9159",
        href: "https://github.com/arunpandian9159",
    },
];

pub fn hero_typing_config() -> TypingConfig {
    TypingConfig::new(HERO_PHRASES)
}

/// Date the site was built, from the `BUILD_TIME` stamp written by build.rs.
pub fn build_date() -> String {
    format_build_date(env!("BUILD_TIME")).unwrap_or_else(|| "unknown".to_string())
}

fn format_build_date(stamp: &str) -> Option<String> {
    let date = DateTime::parse_from_rfc3339(stamp).ok()?;
    Some(date.with_timezone(&Utc).format("%Y-%m-%d").to_string())
}

pub fn build_year() -> String {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.with_timezone(&Utc).format("%Y").to_string())
        .unwrap_or_else(|_| Utc::now().format("%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    const PAGE: [SectionBounds<'static>; 3] = [
        SectionBounds { id: "hero", top: 0.0, height: 700.0 },
        SectionBounds { id: "about", top: 700.0, height: 600.0 },
        SectionBounds { id: "contact", top: 1500.0, height: 400.0 },
    ];

    #[test]
    fn test_nav_anchors_unique() {
        let ids = NAV_ITEMS.iter().map(|n| n.section_id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), NAV_ITEMS.len());
        assert!(NAV_ITEMS.iter().all(|n| n.href.starts_with('#')));
        assert_eq!(NAV_ITEMS[0].section_id(), "hero");
    }

    #[rstest]
    #[case(0.0, Some("hero"))]
    #[case(599.0, Some("hero"))]
    #[case(600.0, Some("about"))]
    #[case(1150.0, Some("about"))]
    #[case(1250.0, None)]
    #[case(1400.0, Some("contact"))]
    #[case(1800.0, None)]
    fn test_active_section(#[case] scroll_y: f64, #[case] want: Option<&str>) {
        assert_eq!(active_section(scroll_y, &PAGE), want);
    }

    #[test]
    fn test_active_section_prefers_later_overlap() {
        let nested = [
            SectionBounds { id: "about", top: 0.0, height: 2000.0 },
            SectionBounds { id: "skills", top: 400.0, height: 300.0 },
        ];
        assert_eq!(active_section(350.0, &nested), Some("skills"));
        assert_eq!(active_section(700.0, &nested), Some("about"));
        assert_eq!(active_section(0.0, &[]), None);

        let collapsed = [SectionBounds { id: "hero", top: 100.0, height: 0.0 }];
        assert_eq!(active_section(0.0, &collapsed), None);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(50.0, false)]
    #[case(50.5, true)]
    #[case(900.0, true)]
    fn test_is_scrolled(#[case] scroll_y: f64, #[case] want: bool) {
        assert_eq!(is_scrolled(scroll_y), want);
    }

    #[test]
    fn test_hero_config() {
        let config = hero_typing_config();
        assert_eq!(config.phrases.len(), HERO_PHRASES.len());
        assert_eq!(config.phrases[0], "Full Stack Developer");
        assert_eq!(config.typing_delay_ms, 100);
        assert!(crate::typing::TypingAnimator::new(config).is_ok());
    }

    #[test]
    fn test_contact_links() {
        let external = CONTACT_INFO
            .iter()
            .filter(|c| c.is_external())
            .map(|c| c.title)
            .collect::<Vec<_>>();
        assert_eq!(external, vec!["LinkedIn", "GitHub"]);
    }

    #[test]
    fn test_content_not_empty() {
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.technologies.is_empty() && p.team_size > 0));
        assert!(EXPERIENCE
            .iter()
            .all(|e| !e.description.is_empty() || !e.items.is_empty()));
    }

    #[test]
    fn test_format_build_date() {
        assert_eq!(
            format_build_date("2025-03-04T22:10:00+00:00").as_deref(),
            Some("2025-03-04")
        );
        assert_eq!(
            format_build_date("2025-03-04T23:30:00-02:00").as_deref(),
            Some("2025-03-05")
        );
        assert_eq!(format_build_date("not a date"), None);
        assert_ne!(build_date(), "unknown");
        assert_eq!(build_year().len(), 4);
    }
}
