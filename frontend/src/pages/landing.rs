use std::rc::Rc;

use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::components::registration_form::RegistrationPanel;
use crate::content::{format_count, WebinarContent};
use crate::Route;

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: linear-gradient(135deg, #eff6ff, #faf5ff, #fdf2f8);
        color: #111827;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .narrow {
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .playfair {
        font-family: "Playfair Display", Georgia, serif;
    }
    .badge {
        display: inline-block;
        background: rgba(255, 255, 255, 0.2);
        border: 1px solid rgba(255, 255, 255, 0.3);
        border-radius: 9999px;
        padding: 0.4rem 1rem;
        margin-bottom: 1.5rem;
        font-weight: 600;
    }
    .hero {
        position: relative;
        overflow: hidden;
        background: linear-gradient(90deg, #2563eb, #9333ea, #db2777);
        color: #fff;
        padding: 5rem 0 7rem;
    }
    .hero h1 {
        font-size: clamp(2.25rem, 6vw, 4.5rem);
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .hero h1 .highlight {
        display: block;
        color: #fde047;
    }
    .hero-subtitle {
        font-size: 1.35rem;
        color: #dbeafe;
        margin-bottom: 2rem;
        line-height: 1.6;
    }
    .event-facts {
        display: flex;
        flex-wrap: wrap;
        gap: 1.5rem;
        justify-content: center;
        margin-bottom: 3rem;
        font-size: 1.1rem;
    }
    .event-facts .icon {
        color: #fde047;
        margin-right: 0.4rem;
    }
    .glass-panel {
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
        border-radius: 1rem;
        padding: 2rem;
        max-width: 28rem;
        margin: 0 auto;
    }
    .glass-panel h3 {
        font-size: 1.5rem;
        margin-bottom: 1rem;
    }
    .registration-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .registration-form input {
        border: 0;
        border-radius: 0.5rem;
        padding: 0.75rem 1rem;
        font-size: 1.1rem;
        color: #111827;
        background: #fff;
    }
    .registration-submit {
        border: 0;
        border-radius: 0.5rem;
        padding: 0.75rem 1rem;
        font-size: 1.1rem;
        font-weight: 700;
        color: #111827;
        cursor: pointer;
        background: linear-gradient(90deg, #facc15, #f97316);
        transition: transform 0.2s;
    }
    .registration-submit:hover {
        transform: scale(1.05);
    }
    .registered-panel {
        text-align: center;
    }
    .registered-icon {
        display: block;
        font-size: 3.5rem;
        color: #4ade80;
        margin-bottom: 1rem;
    }
    .panel-footnote {
        font-size: 0.875rem;
        color: #bfdbfe;
        margin-top: 0.75rem;
        text-align: center;
    }
    .urgency-banner {
        background: #ef4444;
        color: #fff;
        text-align: center;
        padding: 1rem;
        font-weight: 600;
        font-size: 1.1rem;
    }
    .section {
        padding: 5rem 0;
    }
    .section.white {
        background: #fff;
    }
    .section h2 {
        font-size: clamp(2rem, 4vw, 3rem);
        margin-bottom: 1.5rem;
    }
    .section-lead {
        font-size: 1.25rem;
        color: #4b5563;
        margin-bottom: 4rem;
    }
    .benefits-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 2rem;
        margin-bottom: 4rem;
    }
    .card {
        background: #fff;
        border: 1px solid #e5e7eb;
        border-radius: 0.75rem;
        padding: 2rem 1.5rem;
        transition: box-shadow 0.3s, transform 0.3s;
    }
    .card:hover {
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
        transform: translateY(-0.5rem);
    }
    .benefit-card {
        text-align: center;
    }
    .benefit-icon {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        background: linear-gradient(90deg, #3b82f6, #a855f7);
    }
    .curriculum {
        background: linear-gradient(90deg, #eff6ff, #faf5ff);
        border-radius: 1rem;
        padding: 3rem 2rem;
    }
    .curriculum h3 {
        font-size: 1.9rem;
        text-align: center;
        margin-bottom: 2rem;
    }
    .curriculum-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 1rem;
    }
    .curriculum-item {
        display: flex;
        gap: 0.75rem;
        padding: 1rem;
        font-size: 1.1rem;
        color: #374151;
    }
    .curriculum-item .icon {
        color: #22c55e;
    }
    .instructor {
        background: linear-gradient(90deg, #9333ea, #2563eb);
        color: #fff;
    }
    .instructor-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 3rem;
        align-items: center;
    }
    .instructor-title {
        font-size: 1.25rem;
        color: #f3e8ff;
        margin-bottom: 1.5rem;
    }
    .credential {
        display: flex;
        gap: 0.75rem;
        font-size: 1.1rem;
        margin-bottom: 1rem;
    }
    .credential .icon {
        color: #fde047;
    }
    .avatar {
        width: 16rem;
        height: 16rem;
        margin: 0 auto;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 4rem;
        background: linear-gradient(135deg, #c084fc, #60a5fa);
    }
    .instructor-quote {
        margin-top: 1.5rem;
        font-style: italic;
        font-size: 1.1rem;
        color: #f3e8ff;
        text-align: center;
    }
    .testimonials-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 2rem;
    }
    .stars {
        color: #facc15;
        margin-bottom: 1rem;
    }
    .testimonial-content {
        font-style: italic;
        color: #374151;
        margin-bottom: 1rem;
    }
    .testimonial-name {
        font-weight: 600;
    }
    .testimonial-role {
        font-size: 0.875rem;
        color: #4b5563;
    }
    .final-cta {
        background: linear-gradient(90deg, #22c55e, #3b82f6);
        color: #fff;
        text-align: center;
    }
    .final-cta .glass-panel {
        margin-bottom: 2rem;
    }
    .last-chance {
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .last-chance .icon {
        color: #fde047;
    }
    .stats {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .stat-value {
        font-size: 1.9rem;
        font-weight: 700;
    }
    .stat-label {
        color: #bbf7d0;
    }
    .site-footer {
        background: #111827;
        color: #fff;
        padding: 3rem 0;
        text-align: center;
    }
    .site-footer .muted {
        color: #9ca3af;
    }
    .footer-legal {
        border-top: 1px solid #374151;
        margin-top: 2rem;
        padding-top: 2rem;
    }
    .footer-legal a {
        color: #9ca3af;
        margin-left: 0.5rem;
    }
"#;

#[derive(Properties, PartialEq)]
struct StarsProps {
    rating: u8,
}

#[function_component(Stars)]
fn stars(props: &StarsProps) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", props.rating)}>
            { for (0..props.rating).map(|_| html! { <IconView icon={Icon::Star} /> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    content: Rc<WebinarContent>,
}

#[function_component(Hero)]
fn hero(props: &SectionProps) -> Html {
    let content = &props.content;
    let event = &content.event;

    html! {
        <section class="hero">
            <div class="container narrow">
                <span class="badge">{ &content.hero.badge }</span>
                <h1 class="playfair">
                    { &content.hero.headline }
                    <span class="highlight">{ &content.hero.highlight }</span>
                </h1>
                <p class="hero-subtitle">{ &content.hero.subtitle }</p>

                <div class="event-facts">
                    <div>
                        <IconView icon={Icon::Calendar} />
                        <span>{ event.display_date() }</span>
                    </div>
                    <div>
                        <IconView icon={Icon::Clock} />
                        <span>{ event.display_time() }</span>
                    </div>
                    <div>
                        <IconView icon={Icon::Users} />
                        <span>{ format!("{} Parents Registered", format_count(event.registered_count)) }</span>
                    </div>
                </div>

                <div class="glass-panel">
                    <h3>{"Reserve Your FREE Spot"}</h3>
                    <RegistrationPanel
                        submit_label="REGISTER FOR FREE"
                        registered_title="You're Registered!"
                        registered_message="Check your email for webinar access details."
                    />
                    <p class="panel-footnote">
                        {"💯 100% Free • 🔒 No Spam • ✨ Instant Access"}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Discover)]
fn discover(props: &SectionProps) -> Html {
    let content = &props.content;

    html! {
        <section class="section white">
            <div class="container">
                <div class="narrow">
                    <h2 class="playfair">{"What You'll Discover"}</h2>
                    <p class="section-lead">
                        {"Science-backed strategies that will transform your understanding of child development"}
                    </p>
                </div>

                <div class="benefits-grid">
                    { for content.benefits.iter().map(|benefit| html! {
                        <div class="card benefit-card">
                            <div class="benefit-icon">
                                <IconView icon={benefit.icon} />
                            </div>
                            <h3>{ &benefit.title }</h3>
                            <p>{ &benefit.description }</p>
                        </div>
                    }) }
                </div>

                <div class="curriculum">
                    <h3 class="playfair">{"Complete Curriculum Breakdown"}</h3>
                    <div class="curriculum-grid">
                        { for content.curriculum.iter().map(|item| html! {
                            <div class="curriculum-item">
                                <IconView icon={Icon::CheckCircle} />
                                <span>{ item }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutInstructor)]
fn about_instructor(props: &SectionProps) -> Html {
    let instructor = &props.content.instructor;

    html! {
        <section class="section instructor">
            <div class="container">
                <div class="instructor-grid">
                    <div>
                        <span class="badge">{"Your Expert Instructor"}</span>
                        <h2 class="playfair">{ &instructor.name }</h2>
                        <p class="instructor-title">{ &instructor.title }</p>
                        { for instructor.credentials.iter().map(|credential| html! {
                            <div class="credential">
                                <IconView icon={credential.icon} />
                                <span>{ &credential.text }</span>
                            </div>
                        }) }
                    </div>
                    <div>
                        <div class="avatar">{ &instructor.avatar }</div>
                        <p class="instructor-quote">{ format!("\"{}\"", instructor.quote) }</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials(props: &SectionProps) -> Html {
    html! {
        <section class="section white">
            <div class="container">
                <div class="narrow">
                    <h2 class="playfair">{"What Parents Are Saying"}</h2>
                    <p class="section-lead">
                        {"Join thousands of parents who've transformed their approach to child development"}
                    </p>
                </div>
                <div class="testimonials-grid">
                    { for props.content.testimonials.iter().map(|testimonial| html! {
                        <div class="card">
                            <Stars rating={testimonial.rating} />
                            <p class="testimonial-content">{ format!("\"{}\"", testimonial.content) }</p>
                            <p class="testimonial-name">{ &testimonial.name }</p>
                            <p class="testimonial-role">{ &testimonial.role }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta(props: &SectionProps) -> Html {
    let event = &props.content.event;

    html! {
        <section class="section final-cta">
            <div class="container narrow">
                <h2 class="playfair">{"Don't Miss This Opportunity"}</h2>
                <p class="section-lead" style="color: #dcfce7; margin-bottom: 2rem;">
                    {"Your child's brain development happens only once. Get the expert guidance you need to make these precious years count."}
                </p>

                <div class="glass-panel">
                    <div class="last-chance">
                        <IconView icon={Icon::Zap} />
                        <span>{"LAST CHANCE"}</span>
                        <IconView icon={Icon::Zap} />
                    </div>
                    <RegistrationPanel
                        submit_label="SECURE MY FREE SPOT NOW"
                        registered_title="You're All Set!"
                        registered_message="We'll see you at the webinar!"
                    />
                </div>

                <div class="stats">
                    <div>
                        <div class="stat-value">{ event.duration_minutes }</div>
                        <div class="stat-label">{"Minutes of Expert Content"}</div>
                    </div>
                    <div>
                        <div class="stat-value">{"$0"}</div>
                        <div class="stat-label">{"Completely FREE"}</div>
                    </div>
                    <div>
                        <div class="stat-value">{ format_count(event.seats_remaining) }</div>
                        <div class="stat-label">{"Spots Remaining"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let content = &props.content;

    html! {
        <footer class="site-footer">
            <div class="container">
                <h3 class="playfair">{ &content.brand }</h3>
                <p class="muted">{ &content.tagline }</p>
                <div class="footer-legal">
                    <p class="muted">
                        { format!("© {} {}. All rights reserved. |", content.copyright_year, content.brand) }
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        {" |"}
                        <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<Rc<WebinarContent>>();

    // Scroll to top and title the tab only on initial mount
    {
        let title = content
            .as_ref()
            .map(|content| format!("Free Webinar | {}", content.brand))
            .unwrap_or_default();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title(&title);
                    }
                }
                debug!("Landing page mounted");
                || ()
            },
            (),
        );
    }

    let Some(content) = content else {
        return html! {};
    };

    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>

            <Hero content={content.clone()} />

            <section class="urgency-banner">
                { format!(
                    "⚠️ LIMITED SPOTS AVAILABLE - Only {} seats remaining! This webinar won't be recorded.",
                    format_count(content.event.seats_remaining)
                ) }
            </section>

            <Discover content={content.clone()} />
            <AboutInstructor content={content.clone()} />
            <Testimonials content={content.clone()} />
            <FinalCta content={content.clone()} />
            <Footer content={content} />
        </div>
    }
}
