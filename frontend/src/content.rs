//! Copy shown on the pages. Page modules render these; nothing here changes at
//! runtime.

pub struct CoachingValue {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [CoachingValue; 5] = [
    CoachingValue {
        icon: "❤️",
        title: "CONNECTION",
        description: "Fostering meaningful relationships and belonging for a happier, more fulfilling life.",
    },
    CoachingValue {
        icon: "💡",
        title: "INSPIRATION",
        description: "Staying curious and finding wonders in every stage of life, no matter the challenges.",
    },
    CoachingValue {
        icon: "🛡️",
        title: "INTEGRITY",
        description: "Consistency and living by values to create a strong basis for trust and certainty.",
    },
    CoachingValue {
        icon: "👁️",
        title: "TRANSPARENCY",
        description: "Building trust through honesty and celebrating successes together to keep pushing higher.",
    },
    CoachingValue {
        icon: "🔒",
        title: "CONFIDENTIALITY",
        description: "Creating a secure space to share thoughts without fear of judgement or consequences.",
    },
];

pub struct Credential {
    pub image: &'static str,
    pub title: &'static str,
}

pub const CREDENTIALS: [Credential; 2] = [
    Credential {
        image: "credential-hca.png",
        title: "Health Coach Certification",
    },
    Credential {
        image: "credential-sacssp.png",
        title: "Registered Social Worker",
    },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub text: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        icon: "🧠",
        title: "Depression & Anxiety",
        image: "service-mental-health.jpg",
        text: "Individually tailored treatment plans designed to enhance well-being while recognizing the critical connection between mental and physical health.",
    },
    Service {
        icon: "🛡️",
        title: "Substance Use",
        image: "service-recovery.jpg",
        text: "Comprehensive, evidence-based assistance rooted in harm reduction, guiding clients on their personal journeys toward self-determined goals.",
    },
    Service {
        icon: "❤️",
        title: "Relationships",
        image: "service-couples.jpg",
        text: "Helping couples improve communication, resolve conflicts, and build amazing partnerships with practical weekly actions.",
    },
];

pub struct Package {
    pub label: &'static str,
    pub title: &'static str,
    pub highlighted: bool,
    pub features: &'static [&'static str],
}

pub const PACKAGES: [Package; 3] = [
    Package {
        label: "REBOOT",
        title: "One Month Reboot",
        highlighted: false,
        features: &[
            "90-minute initial session",
            "3 weekly sessions",
            "Daily WhatsApp check-in",
            "Clean eating plan",
        ],
    },
    Package {
        label: "MOST POPULAR",
        title: "Elite Package",
        highlighted: true,
        features: &[
            "90-minute weekly sessions",
            "15-minute laser calls",
            "Daily check-ins",
            "Family support sessions",
        ],
    },
    Package {
        label: "PREMIUM",
        title: "Six Month Premium",
        highlighted: false,
        features: &[
            "Weekly 60-min sessions",
            "Daily WhatsApp check-in",
            "Extra sessions as needed",
            "Chronic illness support",
        ],
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub when: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Devina",
        when: "Durban, March 2024",
        text: "I am thrilled to recommend Prof. Monique Marks as a truly exceptional therapist. After trying several other therapists without feeling a connection, I was blown away by Monique's expertise.",
    },
    Testimonial {
        name: "Haneem",
        when: "Durban, July 2024",
        text: "Monique was almost instantly able to put a word to describe the state that I was in and from our very first session I started to feel a change. Truly grateful!",
    },
    Testimonial {
        name: "Melanie",
        when: "July 2025",
        text: "Professor Marks has made an exceptional contribution to my health. I was offered a safe environment with sincere interest and without judgement.",
    },
];

pub struct BlogTeaser {
    pub image: &'static str,
    pub title: &'static str,
}

pub const BLOG_TEASERS: [BlogTeaser; 3] = [
    BlogTeaser {
        image: "blog-post-1.jpg",
        title: "Coming Soon",
    },
    BlogTeaser {
        image: "blog-post-2.jpg",
        title: "Coming Soon",
    },
    BlogTeaser {
        image: "blog-post-3.jpg",
        title: "Coming Soon",
    },
];

/// Delay between cards that reveal side by side.
pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_package_is_highlighted() {
        assert_eq!(PACKAGES.iter().filter(|p| p.highlighted).count(), 1);
        assert!(PACKAGES.iter().all(|p| !p.features.is_empty()));
    }

    #[test]
    fn image_references_are_bare_file_names() {
        let images = CREDENTIALS
            .iter()
            .map(|c| c.image)
            .chain(SERVICES.iter().map(|s| s.image))
            .chain(BLOG_TEASERS.iter().map(|b| b.image));
        for image in images {
            assert!(!image.contains('/'), "{image} should be a file name");
            assert!(image.ends_with(".jpg") || image.ends_with(".png"));
        }
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_ms(0, 100), 0);
        assert_eq!(stagger_ms(4, 100), 400);
        assert_eq!(stagger_ms(2, 150), 300);
    }
}
