pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
    pub points: [&'static str; 3],
}

pub struct MethodStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const NAV_LINKS: &[NavItem] = &[NavItem { label: "Expertise", href: "#services" }];

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        title: "Strategic Planning",
        description: "We align educational goals with technological capabilities to create roadmap strategies that ensure long-term sustainability.",
        icon: "icon-layers",
    },
    ServiceItem {
        title: "LMS Implementation",
        description: "End-to-end guidance on selecting, deploying, and optimizing Learning Management Systems for maximum adoption.",
        icon: "icon-globe",
    },
    ServiceItem {
        title: "Curriculum Design",
        description: "Transforming traditional courseware into engaging, digital-first learning experiences tailored for modern students.",
        icon: "icon-cap",
    },
    ServiceItem {
        title: "Data Analytics",
        description: "Leveraging institutional data to drive decision-making, improve retention rates, and optimize resource allocation.",
        icon: "icon-chart",
    },
    ServiceItem {
        title: "EdTech Infrastructure",
        description: "Auditing and upgrading technical ecosystems to support scalable, secure, and high-performance learning environments.",
        icon: "icon-cpu",
    },
    ServiceItem {
        title: "Innovation Workshops",
        description: "Training faculty and leadership on emerging trends like AI in education to foster a culture of continuous improvement.",
        icon: "icon-bulb",
    },
];

pub const STATS: &[StatItem] = &[
    StatItem { value: "12+", label: "Years Experience" },
    StatItem { value: "45+", label: "Institutions Transformed" },
    StatItem { value: "150k+", label: "Students Impacted" },
    StatItem { value: "100%", label: "Client Retention" },
];

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Institutional Architecture",
        body: "We don't just recommend software; we architect ecosystems. Our consultants audit your existing infrastructure to identify bottlenecks and security vulnerabilities.",
        icon: "icon-shield",
        points: [
            "Cloud Infrastructure Audits",
            "Data Governance Frameworks",
            "Security Protocol Design",
        ],
    },
    Pillar {
        title: "Pedagogical Innovation",
        body: "Technology serves the learner, not the other way around. We partner with faculty to translate curriculum into high-engagement digital experiences.",
        icon: "icon-users",
        points: [
            "Adaptive Learning Paths",
            "Faculty Training & Enablement",
            "Gamified Course Design",
        ],
    },
];

pub const METHODOLOGY: &[MethodStep] = &[
    MethodStep {
        step: "01",
        title: "Audit & Diagnose",
        description: "A deep-dive analysis of your current technical and academic health.",
    },
    MethodStep {
        step: "02",
        title: "Strategic Blueprint",
        description: "Drafting a multi-year roadmap aligned with institutional KPIs.",
    },
    MethodStep {
        step: "03",
        title: "Agile Implementation",
        description: "Phased deployment with constant feedback loops and user training.",
    },
    MethodStep {
        step: "04",
        title: "Continuous Evolution",
        description: "Quarterly reviews to adapt to emerging EdTech trends and AI shifts.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_have_expected_sizes() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(STATS.len(), 4);
        assert_eq!(PILLARS.len(), 2);
        assert_eq!(METHODOLOGY.len(), 4);
    }

    #[test]
    fn methodology_steps_are_numbered_in_order() {
        for (idx, step) in METHODOLOGY.iter().enumerate() {
            assert_eq!(step.step, format!("{:02}", idx + 1));
        }
    }

    #[test]
    fn expertise_link_is_present() {
        assert!(NAV_LINKS.iter().any(|link| link.label == "Expertise"));
    }
}
