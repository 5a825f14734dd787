// Canned portfolio content rendered by the terminal widget.

pub struct SkillGroup {
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

pub struct Role {
    pub title: &'static str,
    pub period: &'static str,
    pub company: &'static str,
    pub summary: &'static str,
}

pub struct Link {
    pub label: &'static str,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [SkillGroup],
    pub experience: &'static [Role],
    pub contact: &'static [Link],
    pub resume_path: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Smit Malaviya",
    title: "Cybersecurity Specialist & Ethical Hacker",
    description: "Passionate about protecting digital assets and securing systems. \
        Specialized in penetration testing, vulnerability assessment, and security \
        architecture. I focus on identifying and mitigating security risks while helping \
        organizations build robust defense mechanisms.",
    skills: &[
        SkillGroup {
            title: "Security Tools",
            tags: &["Nmap", "Wireshark", "Metasploit", "Burp Suite", "OWASP ZAP", "Kali Linux"],
        },
        SkillGroup {
            title: "Security Domains",
            tags: &[
                "Network Security",
                "Web App Security",
                "Mobile Security",
                "Cloud Security",
                "Incident Response",
            ],
        },
        SkillGroup {
            title: "Technical Skills",
            tags: &["Python", "Bash Scripting", "SQL Injection", "XSS", "Cryptography", "Forensics"],
        },
        SkillGroup {
            title: "Certifications",
            tags: &["CompTIA Security+", "CEH", "CISSP", "OSCP", "Bug Bounty"],
        },
    ],
    experience: &[
        Role {
            title: "Security Analyst",
            period: "2023 - Present",
            company: "CyberDefense Corp",
            summary: "Conducted vulnerability assessments on enterprise networks. Performed \
                penetration testing on web applications. Developed security policies and \
                procedures. Responded to security incidents and threats.",
        },
        Role {
            title: "Junior Penetration Tester",
            period: "2022 - 2023",
            company: "SecureNet Solutions",
            summary: "Executed security audits for client systems. Identified and documented \
                security vulnerabilities. Created detailed security assessment reports. \
                Assisted in security awareness training.",
        },
        Role {
            title: "Security Researcher",
            period: "2021 - Present",
            company: "Independent",
            summary: "Participated in bug bounty programs. Researched emerging security threats. \
                Contributed to open-source security tools. Published security advisories and \
                findings.",
        },
    ],
    contact: &[
        Link {
            label: "Email",
            text: "smitmalaviya2006@gmail.com",
            href: None,
        },
        Link {
            label: "LinkedIn",
            text: "/smitmalaviya",
            href: Some("https://www.linkedin.com/in/smit-malaviya-164185228/"),
        },
        Link {
            label: "GitHub",
            text: "/smitmalaviya",
            href: Some("https://github.com/smitmalaviya"),
        },
        Link {
            label: "Location",
            text: "India",
            href: None,
        },
        Link {
            label: "Availability",
            text: "Open to new opportunities",
            href: None,
        },
    ],
    resume_path: "assets/resume/smit-malaviya-resume.pdf",
};

/// Words cycled by the hero typing effect.
pub const HERO_WORDS: &[&str] = &[
    "Pentesting",
    "AI Security",
    "Blockchain",
    "Threat Analysis",
    "Smart Contracts",
    "Adversarial ML",
];
