//! Static content for the generic services page, keyed by URL slug.

/// One service's descriptive content. All data is fixed at compile time and
/// never mutated at runtime.
#[derive(Debug, PartialEq, Eq)]
pub struct ServiceContent {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

pub static SERVICES: [ServiceContent; 4] = [
    ServiceContent {
        slug: "web-development",
        title: "Web Development",
        description: "I build modern, responsive, and user-friendly websites using React, Next.js and performance-first strategies.",
        benefits: &[
            "Responsive layouts for mobile & desktop",
            "SEO-optimized websites",
            "High performance and accessibility",
            "Integration with APIs and databases",
            "Deployment support (Vercel/Netlify)",
        ],
    },
    ServiceContent {
        slug: "ai-ml",
        title: "AI & Machine Learning",
        description: "I create intelligent ML solutions and integrate AI into real-world applications (NLP, CV, recommendations).",
        benefits: &[
            "Custom ML model development",
            "Data preprocessing & pipelines",
            "Model deployment (Flask, FastAPI)",
            "LLM integrations (OpenAI/Gemini)",
            "Monitoring & evaluation",
        ],
    },
    ServiceContent {
        slug: "full-stack",
        title: "Full-Stack Development",
        description: "End-to-end development for web apps covering frontend, backend, DB and deployment.",
        benefits: &[
            "Frontend with React/Next.js",
            "Backend with Node.js/Express or Python",
            "Database design & integration",
            "Auth & security",
            "Cloud deployment (AWS/Vercel)",
        ],
    },
    ServiceContent {
        slug: "ui-ux",
        title: "UI / UX Design",
        description: "User-centered interfaces: wireframes, hi-fi mockups and clickable prototypes.",
        benefits: &[
            "Wireframing & prototyping",
            "Pixel-perfect UI",
            "Design systems & components",
            "User testing & iteration",
            "Developer handoff assets",
        ],
    },
];

/// Shown for an absent or unrecognized slug.
pub static FALLBACK: ServiceContent = ServiceContent {
    slug: "",
    title: "Custom Service",
    description: "Tell me what you need — I'll propose a tailored plan and estimate.",
    benefits: &["Discovery call", "Prototype & plan", "Delivery & handover"],
};

/// Look up a service by slug, case-insensitively. Unknown slugs resolve to
/// [`FALLBACK`] rather than failing.
pub fn resolve(slug: &str) -> &'static ServiceContent {
    let slug = slug.trim().to_lowercase();
    SERVICES.iter().find(|s| s.slug == slug).unwrap_or(&FALLBACK)
}
