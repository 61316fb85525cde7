use chrono::NaiveDate;
use serde_json::{json, Value};

/// Public origin of the deployed site, set at build time via `SITE_URL`.
pub const SITE_URL: &str = match option_env!("SITE_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline_roles: &'static [&'static str],
    pub bio: &'static str,
    pub tagline: &'static str,
    pub photo_path: &'static str,
    pub resume_path: &'static str,
    pub resume_file_name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, `0..=100`.
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub live_url: &'static str,
    pub code_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BlogEntry {
    pub title: &'static str,
    pub link: &'static str,
    pub year: i32,
    pub month: u32,
}

impl BlogEntry {
    /// First day of the publication month.
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Display form, e.g. "June 2025".
    pub fn display_date(&self) -> String {
        self.published()
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_label: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Kajal Verma",
    headline_roles: &[
        "Full Stack Developer",
        "React Enthusiast",
        "Open Source Contributor",
        "Tech Learner",
    ],
    bio: "I’m a 3rd year Computer Science student at NIAMT Ranchi. I build full-stack web applications using React, Node.js, Express, and MongoDB. I love coding, learning new technologies, and creating projects that solve real problems.",
    tagline: "Passionate Full-Stack Developer 💻 | React, Node.js, MongoDB | Open to Internship",
    photo_path: "/kajal-photo.jpg",
    resume_path: "/Kajal-Verma-Resume.pdf",
    resume_file_name: "Kajal-Verma-Resume.pdf",
};

pub static SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "React", level: 80 },
    Skill { name: "Node.js", level: 75 },
    Skill { name: "Express", level: 70 },
    Skill { name: "MongoDB", level: 70 },
    Skill { name: "CSS", level: 80 },
];

pub static PROJECTS: &[Project] = &[Project {
    name: "Uma Dairy Platform",
    description: "Uma Dairy is a react and node.js based web page which is used to sell dairy products such as cowdunk,chhach,ghee.",
    live_url: "https://dairyfrontend.onrender.com/",
    code_url: "https://github.com/kajal19803/dairyfrontend",
}];

pub static EXPERIENCE: &[Experience] = &[Experience {
    role: "Full stack Web Developer Intern",
    company: "EYGDS",
    duration: "Feb 2025 - March 2025",
    details: "Developed frontend components and contributed to backend APIs for internal projects.",
}];

pub static BLOGS: &[BlogEntry] = &[BlogEntry {
    title: "How I Built a Diary App Using MERN Stack",
    link: "https://kajalportfolio.hashnode.dev/how-i-built-a-full-stack-diary-app-with-mern-stack",
    year: 2025,
    month: 6,
}];

pub static CONTACT: ContactDetails = ContactDetails {
    email: "kajalverma6263@gmail.com",
    phone: "+917000235024",
    linkedin_url: "https://www.linkedin.com/in/kajal-verma-09a344241/",
    linkedin_label: "linkedin.com",
};

/// In-page anchors, in navbar order. Each one has a rendered section.
pub const NAV_SECTIONS: &[&str] = &["about", "skills", "projects", "experience", "blog", "contact"];

/// schema.org `Person` for the page head.
pub fn person_json_ld() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "url": SITE_URL,
        "jobTitle": PROFILE.headline_roles.first().copied().unwrap_or_default(),
        "description": PROFILE.bio,
        "email": format!("mailto:{}", CONTACT.email),
        "telephone": CONTACT.phone,
        "image": format!("{}{}", SITE_URL, PROFILE.photo_path),
        "sameAs": [CONTACT.linkedin_url],
        "knowsAbout": SKILLS.iter().map(|s| s.name).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(!SKILLS.is_empty());
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} has level {}", skill.name, skill.level);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let skills = SKILLS.iter().map(|s| s.name).collect::<HashSet<_>>();
        assert_eq!(skills.len(), SKILLS.len());
        let projects = PROJECTS.iter().map(|p| p.name).collect::<HashSet<_>>();
        assert_eq!(projects.len(), PROJECTS.len());
        let sections = NAV_SECTIONS.iter().collect::<HashSet<_>>();
        assert_eq!(sections.len(), NAV_SECTIONS.len());
    }

    #[test]
    fn test_external_links_are_absolute() {
        let links = PROJECTS
            .iter()
            .flat_map(|p| [p.live_url, p.code_url])
            .chain(BLOGS.iter().map(|b| b.link))
            .chain([CONTACT.linkedin_url]);
        for link in links {
            assert!(link.starts_with("https://"), "{link} is not absolute");
        }
    }

    #[test]
    fn test_blog_dates() {
        for blog in BLOGS {
            assert!(blog.published().is_some(), "{} has a bad date", blog.title);
        }
        assert_eq!(BLOGS[0].display_date(), "June 2025");

        let bad = BlogEntry {
            title: "bad",
            link: "https://example.com",
            year: 2025,
            month: 13,
        };
        assert!(bad.published().is_none());
        assert_eq!(bad.display_date(), "");
    }

    #[test]
    fn test_assets_are_root_relative() {
        assert!(PROFILE.photo_path.starts_with('/'));
        assert!(PROFILE.resume_path.starts_with('/'));
        assert!(PROFILE.resume_path.ends_with(PROFILE.resume_file_name));
    }

    #[test]
    fn test_person_json_ld() {
        let ld = person_json_ld();
        assert_eq!(ld["@type"], "Person");
        assert_eq!(ld["name"], "Kajal Verma");
        assert_eq!(ld["jobTitle"], "Full Stack Developer");
        assert_eq!(ld["email"], "mailto:kajalverma6263@gmail.com");
        assert_eq!(ld["sameAs"][0], CONTACT.linkedin_url);
        assert_eq!(
            ld["knowsAbout"].as_array().map(Vec::len),
            Some(SKILLS.len())
        );
    }
}
