//! Copy and static tables rendered by the landing page.

use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TechCategory {
    pub name: &'static str,
    pub icon: Icon,
    /// Star and legend colour.
    pub color: &'static str,
    /// Text colour used on top of `color`.
    pub ink: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub title: &'static str,
    pub blurb: Option<&'static str>,
}

pub const BRAND: &str = "MiniPerplx";

pub const ABOUT_POINTS: &[Feature] = &[
    Feature {
        icon: Icon::Search,
        title: "Minimalistic Search",
        description: "We strip away the clutter to focus on what matters most - delivering accurate and relevant results.",
    },
    Feature {
        icon: Icon::Code,
        title: "AI-Powered",
        description: "Leveraging cutting-edge AI technology to understand and respond to your queries with precision.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Lightning Fast",
        description: "Designed for speed, MiniPerplx provides instant answers to keep up with your pace of work.",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::Globe,
        title: "Web Search",
        description: "Powered by Tavily AI for comprehensive web results.",
    },
    Feature {
        icon: Icon::Code,
        title: "Code Interpreter",
        description: "Utilize e2b.dev for advanced code interpretation and execution.",
    },
    Feature {
        icon: Icon::Cloud,
        title: "Weather Forecast",
        description: "Get accurate weather information via OpenWeatherMap.",
    },
    Feature {
        icon: Icon::Link,
        title: "URL Summary",
        description: "Summarize web content quickly with Jina AI Reader.",
    },
    Feature {
        icon: Icon::MapPin,
        title: "Location Search",
        description: "Find places and nearby locations using Google Maps API.",
    },
    Feature {
        icon: Icon::Mic,
        title: "Translation & TTS",
        description: "Translate text and convert to speech with OpenAI TTS.",
    },
];

pub const TECH_STACK: &[TechCategory] = &[
    TechCategory {
        name: "Core Technologies",
        icon: Icon::Server,
        color: "#FFD700",
        ink: "#000",
        items: &["Next.js", "React", "TypeScript", "Vercel AI SDK", "Tailwind CSS"],
    },
    TechCategory {
        name: "UI & Styling",
        icon: Icon::Palette,
        color: "#00CED1",
        ink: "#fff",
        items: &["shadcn/ui", "Framer Motion", "Lucide Icons"],
    },
    TechCategory {
        name: "AI Services & APIs",
        icon: Icon::Cpu,
        color: "#FF69B4",
        ink: "#fff",
        items: &[
            "Azure OpenAI",
            "Tavily AI",
            "e2b.dev",
            "OpenWeatherMap",
            "Google Maps API",
            "Firecrawl",
        ],
    },
];

pub const TWEET_IDS: &[&str] = &[
    "1825543755748782500",
    "1825876424755941787",
    "1827580223606669661",
    "1825574082345136506",
    "1825973306924872143",
    "1825821083817103852",
];

pub const QUOTES: &[&str] = &[
    "Absolutely love MiniPerplx! 🚀",
    "Game-changer for my workflow. 💼",
    "Simplicity at its finest. ✨",
    "Can't imagine working without it now. 🙌",
    "MiniPerplx is a must-have tool! 🛠️",
];

pub const EXPLORE_LINKS: &[NavLink] = &[
    NavLink {
        href: "#about-us",
        title: "About Us",
        blurb: Some("Learn more about MiniPerplx and our mission."),
    },
    NavLink {
        href: "#features",
        title: "Features",
        blurb: Some("Discover the powerful capabilities of MiniPerplx."),
    },
    NavLink {
        href: "#tech-stack",
        title: "Tech Stack",
        blurb: Some("Explore the technologies powering MiniPerplx."),
    },
    NavLink {
        href: "#testimonials",
        title: "Testimonials",
        blurb: Some("See what others are saying about MiniPerplx."),
    },
];

pub const TRY_IT_LINK: NavLink = NavLink {
    href: "#try-it",
    title: "Try It",
    blurb: None,
};

pub const TRY_IT_BLURB: &str = "Discover the power of minimalistic AI search.";

pub const FLOATING_ICONS: &[Icon] = &[
    Icon::Search,
    Icon::Zap,
    Icon::Code,
    Icon::Cloud,
    Icon::Link,
    Icon::MapPin,
    Icon::Globe,
    Icon::Mic,
];

pub const PRODUCT_HUNT_URL: &str = "https://www.producthunt.com/posts/miniperplx?embed=true&utm_source=badge-featured&utm_medium=badge&utm_souce=badge-miniperplx";
pub const PRODUCT_HUNT_BADGE: &str = "https://api.producthunt.com/widgets/embed-image/v1/featured.svg?post_id=481378&theme=light";
pub const PEERLIST_URL: &str = "https://peerlist.io/zaidmukaddam/project/miniperplx";
pub const PEERLIST_BADGE: &str = "/Launch_SVG_Light.svg";
