use chrono::Datelike;
use yew::prelude::*;

use crate::components::drawer::MobileDrawer;
use crate::components::navbar::{section_link, NavBar};
use crate::components::scroll_top::ScrollTopButton;
use crate::config;
use crate::forms::contact::ContactForm;
use crate::forms::waitlist::WaitlistForm;
use crate::nav::{Navigator, Section};
use crate::scroll::use_reveal_on_scroll;
use crate::sink::SupabaseClient;
use crate::viewport::{BrowserViewport, Viewport};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    stats: &'static str,
}

const FEATURES: [Feature; 5] = [
    Feature {
        icon: "🗺",
        title: "Smart TrailFinder",
        description: "Discover personalized trails based on your preferences, difficulty level, and environmental impact.",
        stats: "Coming Soon",
    },
    Feature {
        icon: "🧭",
        title: "AI Trail Assistant",
        description: "Get real-time guidance and essential survival tips about local ecosystems during your adventure.",
        stats: "Coming Soon",
    },
    Feature {
        icon: "🍃",
        title: "Trip Planner",
        description: "Plan your outdoor adventure with weather-aware routing, viewpoints, and sustainable campsite options.",
        stats: "Coming Soon",
    },
    Feature {
        icon: "🎒",
        title: "Smart Eco Packing",
        description: "Receive minimalist packing lists with environmentally friendly alternatives for your journey.",
        stats: "Coming Soon",
    },
    Feature {
        icon: "🏆",
        title: "Eco Missions",
        description: "Complete environmental challenges, earn rewards, and track your positive impact on nature.",
        stats: "Coming Soon",
    },
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub sink: SupabaseClient,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let nav = use_state(Navigator::default);
    use_reveal_on_scroll();

    // Freeze the page behind the open drawer
    {
        let snapshot = (*nav).clone();
        use_effect_with_deps(
            move |_| {
                snapshot.apply_scroll_lock(&BrowserViewport);
                || BrowserViewport.lock_scroll(false)
            },
            nav.drawer_open(),
        );
    }

    let on_navigate = {
        let nav = nav.clone();
        Callback::from(move |section: Section| {
            let mut next = (*nav).clone();
            if next.go_to(section, &BrowserViewport) {
                nav.set(next);
            }
        })
    };
    let on_toggle_drawer = {
        let nav = nav.clone();
        Callback::from(move |_: ()| {
            let mut next = (*nav).clone();
            next.toggle_drawer();
            nav.set(next);
        })
    };
    let on_close_drawer = {
        let nav = nav.clone();
        Callback::from(move |_: ()| {
            let mut next = (*nav).clone();
            next.close_drawer();
            nav.set(next);
        })
    };

    let active = nav.active();
    let year = chrono::Utc::now().year();

    html! {
        <main class="landing-page">
            <style>{STYLES}</style>

            <MobileDrawer
                open={nav.drawer_open()}
                active={active}
                on_navigate={on_navigate.clone()}
                on_close={on_close_drawer}
            />
            <NavBar active={active} on_navigate={on_navigate.clone()} on_toggle_drawer={on_toggle_drawer} />

            // Hero with the waitlist signup
            <section id={Section::Waitlist.id()} class="hero">
                <div class="hero-copy fade-in" data-reveal="hero">
                    <div class="badge">
                        <span>{"Coming Soon - Beta Access Available"}</span>
                    </div>
                    <h1>
                        <span class="gradient-text">{"Explore Nature"}</span>
                        <br />
                        <span class="accent">{"Sustainably"}</span>{" with TrailMate"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Be among the first to experience the next generation of eco-friendly trail exploration. Help shape the future of sustainable outdoor adventures."}
                    </p>
                    <WaitlistForm sink={props.sink.clone()} />
                </div>
                <div class="hero-image fade-in" data-reveal="hero-image">
                    <img src="/public/hero.svg" alt="TrailMate App Screenshot" />
                </div>
            </section>

            <section id={Section::Features.id()} class="features">
                <div class="section-heading fade-in" data-reveal="features-heading">
                    <div class="badge"><span>{"Planned Features"}</span></div>
                    <h2><span class="gradient-text">{"Features that will make a difference"}</span></h2>
                    <p>
                        {"Here's what we're building - a platform that combines technology with environmental consciousness to enhance your outdoor adventures"}
                    </p>
                </div>
                <div class="features-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div
                                key={feature.title}
                                class="feature-card fade-in"
                                data-reveal={format!("feature-{}", index)}
                                style={format!("transition-delay: {}ms", index * config::REVEAL_STAGGER_MS)}
                            >
                                <div class="feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                                <div class="feature-stats">
                                    <span>{feature.stats}</span>{" →"}
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id={Section::Contact.id()} class="contact">
                <div class="section-heading fade-in" data-reveal="contact-heading">
                    <div class="badge"><span>{"Get in Touch"}</span></div>
                    <h2><span class="gradient-text">{"Let's Connect"}</span></h2>
                    <p>{"Have questions about TrailMate? We'd love to hear from you."}</p>
                </div>
                <ContactForm sink={props.sink.clone()} />
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <div class="nav-logo">
                        <img src="/public/logo.svg" alt="TrailMate Logo" width="24" height="24" />
                        <span class="brand">{"TrailMate"}</span>
                    </div>
                    <div class="footer-links">
                        { section_link(Section::Waitlist, "Get Early Access", "footer-link", active, &on_navigate) }
                        { section_link(Section::Features, "Features", "footer-link", active, &on_navigate) }
                        { section_link(Section::Contact, "Contact", "footer-link", active, &on_navigate) }
                    </div>
                    <p class="copyright">{format!("© {} TrailMate. All rights reserved.", year)}</p>
                </div>
            </footer>

            <ScrollTopButton />
        </main>
    }
}

const STYLES: &str = r#"
:root {
    --green: #3A7D44;
    --green-light: #5AAE71;
    --text: #1E1E1E;
    --muted: #555555;
    --bg: #FAFAF7;
    --card: rgba(255, 255, 255, 0.9);
    --border: rgba(229, 231, 235, 0.7);
}
html.dark {
    --text: #FFFFFF;
    --muted: #D1D5DB;
    --bg: #0F1419;
    --card: rgba(31, 41, 55, 0.9);
    --border: rgba(55, 65, 81, 0.3);
}
body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Open Sans", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    transition: background 0.3s, color 0.3s;
}
.landing-page { padding-top: 80px; }
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 80px;
    z-index: 30;
    backdrop-filter: blur(12px);
    background: var(--card);
    border-bottom: 1px solid var(--border);
}
.nav-content {
    max-width: 1200px;
    height: 100%;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { display: flex; align-items: center; gap: 0.5rem; }
.brand { font-family: Montserrat, sans-serif; font-weight: 600; font-size: 1.25rem; }
.nav-links { display: flex; align-items: center; gap: 2rem; }
.nav-link, .drawer-link, .footer-link {
    color: var(--text);
    text-decoration: none;
    font-weight: 500;
    transition: color 0.2s;
}
.nav-link:hover, .nav-link.active, .drawer-link:hover, .footer-link:hover { color: var(--green); }
html.dark .nav-link:hover, html.dark .nav-link.active { color: var(--green-light); }
.nav-mobile { display: none; align-items: center; gap: 0.75rem; }
.burger-menu {
    display: flex;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span { width: 22px; height: 2px; background: var(--text); }
.theme-toggle {
    width: 40px;
    height: 40px;
    border-radius: 50%;
    border: none;
    cursor: pointer;
    background: rgba(0, 0, 0, 0.05);
    color: var(--green);
}
html.dark .theme-toggle { background: rgba(255, 255, 255, 0.08); color: #FBBF24; }
.theme-toggle.placeholder { opacity: 0; }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); }
.drawer-overlay {
    position: fixed;
    inset: 0;
    z-index: 40;
    background: rgba(0, 0, 0, 0.3);
    backdrop-filter: blur(4px);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s;
}
.drawer-overlay.open { opacity: 1; pointer-events: auto; }
.drawer {
    position: fixed;
    top: 0;
    right: 0;
    bottom: 0;
    width: 280px;
    z-index: 50;
    display: flex;
    flex-direction: column;
    padding: 1.5rem;
    background: var(--bg);
    box-shadow: -8px 0 32px rgba(0, 0, 0, 0.2);
    transform: translateX(100%);
    transition: transform 0.3s ease-in-out;
}
.drawer.open { transform: translateX(0); }
.drawer-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem; }
.drawer-close { background: none; border: none; color: var(--text); font-size: 1.1rem; cursor: pointer; }
.drawer-links { display: flex; flex-direction: column; gap: 1.5rem; font-size: 1.1rem; }
.drawer-footer {
    margin-top: auto;
    padding-top: 2rem;
    border-top: 1px solid var(--border);
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.hero, .features, .contact, .footer-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 5rem 1.5rem;
}
.hero { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.hero h1 { font-size: 3.5rem; line-height: 1.1; margin: 1.5rem 0; }
.gradient-text {
    background: linear-gradient(90deg, var(--text), var(--green));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.accent { color: var(--green); }
html.dark .accent { color: var(--green-light); }
.hero-subtitle, .section-heading p { color: var(--muted); font-size: 1.125rem; line-height: 1.7; }
.hero-image img { width: 100%; height: auto; }
.badge {
    display: inline-block;
    padding: 0.4rem 1rem;
    border-radius: 999px;
    background: rgba(58, 125, 68, 0.1);
    color: var(--green);
    font-size: 0.875rem;
    font-weight: 500;
}
.waitlist-form { display: flex; gap: 0.75rem; margin-top: 2rem; }
.waitlist-form input, .contact-form input, .contact-form textarea {
    flex: 1;
    padding: 0.9rem 1.1rem;
    border-radius: 12px;
    border: 1px solid var(--border);
    background: var(--card);
    color: var(--text);
    font: inherit;
}
.primary-button {
    padding: 0.9rem 1.5rem;
    border: none;
    border-radius: 12px;
    background: var(--green);
    color: white;
    font-weight: 600;
    cursor: pointer;
}
.primary-button:disabled { opacity: 0.7; cursor: not-allowed; }
.waitlist-hint { color: var(--muted); font-size: 0.875rem; margin-top: 0.75rem; }
.form-status {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-top: 1rem;
    padding: 0.75rem 1rem;
    border-radius: 10px;
    font-size: 0.9rem;
}
.form-status.success { background: rgba(58, 125, 68, 0.1); color: var(--green); }
.form-status.error { background: #FEE2E2; color: #DC2626; }
html.dark .form-status.error { background: rgba(127, 29, 29, 0.2); color: #F87171; }
.section-heading { text-align: center; max-width: 720px; margin: 0 auto 3rem; }
.section-heading h2 { font-size: 2.75rem; margin: 1rem 0; }
.features-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.feature-card {
    padding: 2rem;
    border-radius: 24px;
    background: var(--card);
    border: 1px solid var(--border);
}
.feature-icon { font-size: 1.75rem; margin-bottom: 1.5rem; }
.feature-card p { color: var(--muted); line-height: 1.6; }
.feature-stats { color: var(--green); font-weight: 500; }
.contact-form {
    max-width: 720px;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    padding: 2.5rem;
    border-radius: 24px;
    background: var(--card);
    border: 1px solid var(--border);
}
.contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.contact-form label { display: flex; flex-direction: column; gap: 0.5rem; font-size: 0.875rem; color: var(--muted); }
.footer { border-top: 1px solid var(--border); }
.footer-content { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 2rem; padding: 3rem 1.5rem; }
.footer-links { display: flex; gap: 2.5rem; }
.copyright { color: var(--muted); font-size: 0.875rem; }
.scroll-top {
    position: fixed;
    right: 2rem;
    bottom: 2rem;
    width: 48px;
    height: 48px;
    border-radius: 50%;
    border: none;
    background: var(--green);
    color: white;
    font-size: 1.25rem;
    cursor: pointer;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s;
}
.scroll-top.visible { opacity: 1; pointer-events: auto; }
.fade-in {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}
.animate-in { opacity: 1; transform: translateY(0); }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-mobile { display: flex; }
    .hero { grid-template-columns: 1fr; }
    .hero h1 { font-size: 2.5rem; }
    .features-grid, .contact-row { grid-template-columns: 1fr; }
    .waitlist-form { flex-direction: column; }
}
"#;
