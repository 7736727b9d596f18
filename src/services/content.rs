//! Marketing copy and contact channels for the site.
//!
//! Everything here is fixed data; pages render it as-is.

use url::Url;

pub const BUSINESS_NAME: &str = "Fresh Air Duct Cleaning";
pub const PHONE_DISPLAY: &str = "(520) 842-8930";
pub const PHONE_E164: &str = "+15208428930";
pub const EMAIL: &str = "info@freshairductcleaning.com";
pub const WHATSAPP_NUMBER: &str = "15208428930";
pub const QUOTE_CHAT_MESSAGE: &str =
    "Hi, I'd like to get a free quote for air duct cleaning services.";
pub const SCHEDULE_CHAT_MESSAGE: &str = "Hi, I'd like to schedule your service.";

pub fn tel_link() -> String {
    format!("tel:{PHONE_E164}")
}

pub fn mailto_link() -> String {
    format!("mailto:{EMAIL}")
}

/// WhatsApp click-to-chat link with a pre-filled message.
pub fn whatsapp_link(message: &str) -> String {
    let base = format!("https://wa.me/{WHATSAPP_NUMBER}");
    match Url::parse_with_params(&base, &[("text", message)]) {
        Ok(url) => url.into(),
        Err(e) => {
            tracing::warn!(error = %e, "Could not build WhatsApp link");
            base
        }
    }
}

pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", path: "/" },
    NavItem { name: "Services", path: "/services" },
    NavItem { name: "Contact", path: "/contact" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        url: "https://www.facebook.com/profile.php?id=61580134311093",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/freshair._.ductcleaning/",
    },
    SocialLink {
        label: "TikTok",
        url: "https://www.tiktok.com/@freshair_ductcleaning",
    },
];

/// Title and blurb pair used by several card grids.
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Residential Cleaning",
        description: "Professional air duct cleaning for homes of all sizes. Improve your family's air quality today.",
    },
    Highlight {
        title: "Commercial Cleaning",
        description: "Keep your business environment healthy with our comprehensive commercial duct cleaning services.",
    },
    Highlight {
        title: "Health Benefits",
        description: "Reduce allergens, dust, and contaminants that can affect your health and well-being.",
    },
    Highlight {
        title: "Energy Savings",
        description: "Clean ducts improve HVAC efficiency, reducing energy costs by up to 30%.",
    },
];

pub const BENEFITS: &[&str] = &[
    "Better Air Quality",
    "Reduced Energy Bills",
    "Eliminate Odors",
    "Remove Allergens",
    "Extend HVAC Life",
    "Improve Airflow",
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "50,000+", label: "Happy Customers" },
    Stat { number: "15+", label: "Years Experience" },
    Stat { number: "50", label: "States Served" },
    Stat { number: "24/7", label: "Emergency Service" },
];

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub comment: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        location: "Dallas, TX",
        comment: "Amazing service! The team was professional and thorough. Our air quality has improved dramatically.",
        rating: 5,
    },
    Testimonial {
        name: "Mike Chen",
        location: "Los Angeles, CA",
        comment: "Best decision we made for our home. The difference in air quality is night and day.",
        rating: 5,
    },
    Testimonial {
        name: "Jennifer Martinez",
        location: "Miami, FL",
        comment: "Professional, punctual, and excellent results. Highly recommend Fresh Air Duct Cleaning.",
        rating: 5,
    },
];

pub const HOME_PROCESS: &[Highlight] = &[
    Highlight { title: "Inspection", description: "Thorough assessment of your duct system" },
    Highlight { title: "Cleaning", description: "Professional cleaning with industry-leading equipment" },
    Highlight { title: "Testing", description: "Quality verification and air flow testing" },
];

pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const RESIDENTIAL_SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        title: "Complete Duct System Cleaning",
        description: "Comprehensive cleaning of all supply and return air ducts, registers, and grilles.",
        features: &["All air ducts cleaned", "Register removal & cleaning", "Before/after photos", "Air flow testing"],
    },
    ServiceOffering {
        title: "HVAC Component Cleaning",
        description: "Deep cleaning of your HVAC system components for optimal performance.",
        features: &["Blower fan cleaning", "Evaporator coil cleaning", "Heat exchanger cleaning", "Filter replacement"],
    },
    ServiceOffering {
        title: "Sanitization & Deodorization",
        description: "EPA-approved antimicrobial treatments to eliminate odors and contaminants.",
        features: &["Antimicrobial treatment", "Odor elimination", "Mold prevention", "Long-lasting protection"],
    },
];

pub const COMMERCIAL_SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        title: "Office Buildings",
        description: "Maintain healthy indoor air quality for your employees and visitors.",
        features: &["Minimal disruption", "After-hours service", "Compliance reporting", "Maintenance plans"],
    },
    ServiceOffering {
        title: "Retail Spaces",
        description: "Keep your customers comfortable with clean, fresh air circulation.",
        features: &["Flexible scheduling", "Quick turnaround", "Professional appearance", "Customer satisfaction"],
    },
    ServiceOffering {
        title: "Restaurants & Hotels",
        description: "Specialized cleaning for hospitality industry with strict health standards.",
        features: &["Health code compliance", "Grease removal", "Kitchen exhaust cleaning", "Guest comfort priority"],
    },
];

pub struct PricedService {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

pub const ADDITIONAL_SERVICES: &[PricedService] = &[
    PricedService {
        title: "Dryer Vent Cleaning",
        description: "Prevent fires and improve efficiency with professional dryer vent cleaning.",
        price: "Starting at $99",
    },
    PricedService {
        title: "HVAC Maintenance",
        description: "Regular maintenance to keep your system running efficiently year-round.",
        price: "Starting at $149",
    },
    PricedService {
        title: "Air Quality Testing",
        description: "Comprehensive testing to identify allergens, mold, and other contaminants.",
        price: "Starting at $199",
    },
];

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Initial Inspection",
        description: "Comprehensive assessment of your entire duct system using advanced camera equipment.",
        duration: "30-60 minutes",
    },
    ProcessStep {
        title: "System Preparation",
        description: "Protect your home and prepare equipment for the cleaning process.",
        duration: "15-30 minutes",
    },
    ProcessStep {
        title: "Professional Cleaning",
        description: "Deep cleaning using powerful vacuum systems and specialized brushes.",
        duration: "2-4 hours",
    },
    ProcessStep {
        title: "Sanitization",
        description: "Apply EPA-approved antimicrobial treatments for long-lasting protection.",
        duration: "30 minutes",
    },
    ProcessStep {
        title: "Final Inspection",
        description: "Quality verification with before/after photos and air flow testing.",
        duration: "30 minutes",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How often should I have my air ducts cleaned?",
        answer: "The National Air Duct Cleaners Association (NADCA) recommends cleaning your air ducts every 3-5 years for most homes, or more frequently if you have pets, allergies, or live in a dusty environment.",
    },
    Faq {
        question: "How long does the cleaning process take?",
        answer: "Most residential duct cleaning services take 3-5 hours to complete, depending on the size of your home and the complexity of your HVAC system.",
    },
    Faq {
        question: "Will duct cleaning reduce my energy bills?",
        answer: "Yes, clean ducts can improve your HVAC system's efficiency by up to 30%, which can lead to significant energy savings on your monthly bills.",
    },
    Faq {
        question: "Is your cleaning process safe for my family and pets?",
        answer: "Absolutely. We use EPA-approved, non-toxic cleaning agents and follow strict safety protocols. Your family and pets can remain in the home during the cleaning process.",
    },
];

pub struct ContactChannel {
    pub title: &'static str,
    pub details: &'static str,
    pub subtitle: &'static str,
    pub action: Option<String>,
}

pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            title: "Phone",
            details: PHONE_DISPLAY,
            subtitle: "24/7 Customer Support",
            action: Some(tel_link()),
        },
        ContactChannel {
            title: "Email",
            details: EMAIL,
            subtitle: "We respond within 2 hours",
            action: Some(mailto_link()),
        },
        ContactChannel {
            title: "Service Area",
            details: "All 50 States",
            subtitle: "Nationwide Coverage",
            action: None,
        },
        ContactChannel {
            title: "Hours",
            details: "24/7 Emergency Service",
            subtitle: "Regular Hours: 7 AM - 7 PM",
            action: None,
        },
    ]
}

pub const WHY_CHOOSE_US: &[&str] = &[
    "NADCA Certified Technicians",
    "30-Day Satisfaction Guarantee",
    "Licensed, Bonded & Insured",
    "Emergency Service Available",
    "Free Estimates & Consultations",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link(QUOTE_CHAT_MESSAGE);
        assert!(link.starts_with("https://wa.me/15208428930?text="));
        assert!(!link.contains(' '));

        let parsed = Url::parse(&link).unwrap();
        let text = parsed.query_pairs().find(|(k, _)| k == "text").unwrap().1;
        assert_eq!(text, QUOTE_CHAT_MESSAGE);
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(tel_link(), "tel:+15208428930");
        assert_eq!(mailto_link(), "mailto:info@freshairductcleaning.com");
        let channels = contact_channels();
        assert_eq!(channels.iter().filter(|c| c.action.is_some()).count(), 2);
    }
}
