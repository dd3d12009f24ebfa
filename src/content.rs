//! Display copy for the page sections.

pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Services", section: "services" },
    NavItem { label: "Partners", section: "partners" },
    NavItem { label: "Fleet", section: "fleet" },
    NavItem { label: "Testimonials", section: "testimonials" },
    NavItem { label: "Contact", section: "contact" },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service {
        title: "Less Than Truckload",
        description: "Cost-effective solutions for smaller shipments, optimizing efficiency and reducing expenses.",
        icon: "🚚",
    },
    Service {
        title: "Refrigerated Freight",
        description: "Temperature-controlled transportation for perishable goods, ensuring freshness and compliance.",
        icon: "❄️",
    },
    Service {
        title: "Hazmat Freight",
        description: "Specialized handling and transportation of hazardous materials, adhering to strict safety regulations.",
        icon: "⚠️",
    },
    Service {
        title: "Expedited Shipping",
        description: "Fast and reliable delivery for time-sensitive shipments, ensuring your goods arrive when needed.",
        icon: "⏱️",
    },
    Service {
        title: "Specialized Freight",
        description: "Custom solutions for oversized, heavy, or unusual cargo that requires special handling and equipment.",
        icon: "📦",
    },
    Service {
        title: "Warehousing & Distribution",
        description: "Comprehensive storage and distribution services to optimize your supply chain operations.",
        icon: "🏭",
    },
];

pub struct Partner {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
}

pub static PARTNERS: [Partner; 5] = [
    Partner { id: "power-dat", name: "Power DAT", logo: "/assets/partners/power-dat.svg" },
    Partner { id: "ups", name: "UPS", logo: "/assets/partners/ups.svg" },
    Partner { id: "fedex", name: "FedEx", logo: "/assets/partners/fedex.svg" },
    Partner { id: "walmart", name: "Walmart", logo: "/assets/partners/walmart.svg" },
    Partner { id: "costco", name: "Costco", logo: "/assets/partners/costco.svg" },
];

pub struct Truck {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
    pub image: &'static str,
}

pub static FLEET: [Truck; 4] = [
    Truck {
        id: "dry-van",
        title: "Freightliner Cascadia",
        description: "Discover the Fifth Generation Cascadia, engineered for safety, efficiency, and profitability.",
        features: [
            "Innovated for Safety",
            "Defined by Profitability",
            "Intelligent Braking Control System",
        ],
        image: "https://img.fleetowner.com/files/base/ebm/fleetowner/image/2024/10/670d1548aa5657b07992b5df-13_fifthgenerationfreightlinercascadiadaycabonhigh.png?auto=format,compress&fit=max&q=45&w=640&width=640",
    },
    Truck {
        id: "refrigerated",
        title: "Volvo VNL",
        description: "The all-new VNL offers spaces optimized for both working and living, putting the driver comfortably in command and maximizing productivity.",
        features: [
            "Prepared for nearly every 'what if?'",
            "The all-new VNL with the D13 engine",
            "10% improvement in fuel efficiency",
        ],
        image: "https://www.volvotrucks.us/trucks/vnl/media_188e41b129559a282a04d3b9cd92e5669355f655b.jpeg?width=2000&format=webply&optimize=medium",
    },
    Truck {
        id: "flatbed",
        title: "Kenworth T680",
        description: "Start with the most highly evolved aerodynamic long-haul tractor Kenworth has ever engineered.",
        features: [
            "Profit-Tuned Performance",
            "Cutting Edge Exterior Styling",
            "Driver-Optimized Technology",
        ],
        image: "https://www.kenworthne.com/hubfs/Website%20Files/Showroom/T680-Truck.webp",
    },
    Truck {
        id: "specialized",
        title: "Mack Anthem",
        description: "The Mack Anthem is a heavy-duty truck designed to be more efficient and productive for the construction industry.",
        features: [
            "Safer drives by design",
            "Efficiency over everything",
            "Reduced fuel costs by up to 13.5%",
        ],
        image: "https://www.macktrucks.com/trucks/anthem/media_1f153ac933f598062cadaf8dc2924b41ffdacfcd1.jpeg?format=webp&optimize=medium&width=2880",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub initials: &'static str,
    pub position: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "We've worked with several carriers over the years, but none have provided the level of service and attention to detail that US Cargo Solutions offers. Their team is responsive, and their drivers are professional.",
        name: "Jane Smith",
        initials: "JS",
        position: "Supply Chain Director, XYZ Retail",
    },
    Testimonial {
        quote: "US Cargo Solutions has been our go-to carrier for the past 5 years. Their reliability and professionalism are unmatched in the industry. Our shipments always arrive on time and in perfect condition.",
        name: "John Doe",
        initials: "JD",
        position: "Logistics Manager, ABC Manufacturing",
    },
    Testimonial {
        quote: "The customer service at US Cargo Solutions is exceptional. They're always available to answer questions and provide updates on our shipments. I highly recommend their services to any business looking for reliable transportation.",
        name: "Robert Johnson",
        initials: "RJ",
        position: "Operations Director, Global Foods Inc.",
    },
    Testimonial {
        quote: "Since partnering with US Cargo Solutions, we've seen a significant improvement in our logistics efficiency. Their advanced tracking systems and professional drivers ensure our products reach customers safely and on time.",
        name: "Emily Chen",
        initials: "EC",
        position: "VP of Distribution, Tech Solutions Ltd.",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Facebook", url: "https://facebook.com/uscargosolutions" },
    SocialLink { label: "Instagram", url: "https://instagram.com/uscargosolutions" },
    SocialLink { label: "LinkedIn", url: "https://linkedin.com/company/uscargosolutions" },
    SocialLink { label: "Twitter", url: "https://twitter.com/uscargosolutions" },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fleet_tab_ids_are_unique() {
        let ids: HashSet<_> = FLEET.iter().map(|truck| truck.id).collect();
        assert_eq!(ids.len(), FLEET.len());
    }

    #[test]
    fn testimonial_initials_match_names() {
        for testimonial in &TESTIMONIALS {
            let initials: String = testimonial
                .name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect();
            assert_eq!(initials, testimonial.initials);
        }
    }
}
