//! Static Sections
//!
//! Hand-authored page sections that never come from the API.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::{ContactForm, RevealCard};
use crate::scroll::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let jump = |ev: MouseEvent, id: &str| {
        ev.prevent_default();
        scroll_to_section(id);
    };

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">"Hi, I'm a " <span class="highlight">"Full-Stack Developer"</span></h1>
                <p class="hero-subtitle">"I build fast, accessible web and mobile experiences."</p>
                <div class="hero-buttons">
                    <a href="#projects" class="btn btn-primary" on:click=move |ev| jump(ev, "projects")>
                        "View My Work"
                    </a>
                    <a href="#contact" class="btn btn-secondary" on:click=move |ev| jump(ev, "contact")>
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-content">
                    <p>
                        "I enjoy turning ideas into products, from the database schema to the last pixel. "
                        "Most of my work lives on the web, with the occasional mobile app and API on the side."
                    </p>
                </div>
            </div>
        </section>
    }
}

/// (icon, title, description)
const SERVICES: &[(&str, &str, &str)] = &[
    ("fas fa-laptop-code", "Web Development", "Responsive sites and single-page applications."),
    ("fas fa-mobile-alt", "Mobile Apps", "Cross-platform apps for iOS and Android."),
    ("fas fa-server", "API Design", "Well-documented REST services and integrations."),
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"Services"</h2>
                <div class="services-grid">
                    {SERVICES.iter().map(|&(icon, title, description)| view! {
                        <RevealCard class="service-card">
                            <div class="service-icon"><i class=icon></i></div>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </RevealCard>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// (icon, label, value)
const CONTACT_ITEMS: &[(&str, &str, &str)] = &[
    ("fas fa-envelope", "Email", "hello@example.com"),
    ("fas fa-map-marker-alt", "Location", "Remote"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        {CONTACT_ITEMS.iter().map(|&(icon, label, value)| view! {
                            <RevealCard class="contact-item">
                                <i class=icon></i>
                                <div>
                                    <h4>{label}</h4>
                                    <p>{value}</p>
                                </div>
                            </RevealCard>
                        }).collect_view()}
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}
