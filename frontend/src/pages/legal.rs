use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::WebinarContent;
use crate::Route;

const LEGAL_CSS: &str = r#"
    .legal-content {
        max-width: 800px;
        margin: 0 auto;
        padding: 4rem 1.5rem;
        color: #1f2937;
        line-height: 1.7;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .legal-content h1 {
        font-size: 2.25rem;
        margin-bottom: 2rem;
    }
    .legal-content h2 {
        font-size: 1.35rem;
        margin: 2rem 0 0.75rem;
    }
    .legal-content ul {
        padding-left: 1.5rem;
    }
    .legal-links {
        margin-top: 3rem;
        text-align: center;
    }
"#;

#[hook]
fn use_brand_name() -> String {
    use_context::<Rc<WebinarContent>>()
        .map(|content| content.brand.clone())
        .unwrap_or_else(|| "MindBloom Parenting".to_string())
}

#[function_component(LegalLinks)]
fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Home}>{"Back to the webinar"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let brand = use_brand_name();

    html! {
        <div class="legal-content privacy-policy">
            <style>{ LEGAL_CSS }</style>
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What We Collect"}</h2>
                <p>{"The registration form asks for two things:"}</p>
                <ul>
                    <li>{"Your name (so we know how to greet you)"}</li>
                    <li>{"Your email address (so we can send webinar details)"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How It Is Used"}</h2>
                <p>{"Your details are used only to confirm your spot and send the webinar access link and calendar invite. We never sell or share them."}</p>
            </section>

            <section>
                <h2>{"3. Retention"}</h2>
                <p>{"Registration details are kept until the webinar has taken place and then deleted, unless you ask to hear about future sessions."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <ul>
                    <li>{"Ask what we hold about you"}</li>
                    <li>{"Correct your name or email address"}</li>
                    <li>{"Ask us to delete your registration at any time"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Contact"}</h2>
                <p>{ format!("For privacy questions, contact the {} team through the address in your confirmation email.", brand) }</p>
            </section>
            <LegalLinks />
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    let brand = use_brand_name();

    html! {
        <div class="legal-content terms-of-service">
            <style>{ LEGAL_CSS }</style>
            <h1>{ format!("{} Terms of Service", brand) }</h1>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{ format!("These Terms govern your registration for and attendance of webinars hosted by {}. By registering you agree to them.", brand) }</p>
            </section>

            <section>
                <h2>{"2. Free Access"}</h2>
                <p>{"The webinar is free of charge. Seats are limited and offered on a first come, first served basis."}</p>
            </section>

            <section>
                <h2>{"3. Educational Content"}</h2>
                <p>{"Material presented in the webinar is general guidance on child development and is not medical advice. Consult a qualified professional about your own child."}</p>
            </section>

            <section>
                <h2>{"4. Recording"}</h2>
                <p>{"The session is live only and will not be recorded or redistributed."}</p>
            </section>

            <section>
                <h2>{"5. Changes"}</h2>
                <p>{"We may reschedule the webinar. Registered attendees are told by email before any change."}</p>
            </section>
            <LegalLinks />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content not-found">
            <style>{ LEGAL_CSS }</style>
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for does not exist."}</p>
            <LegalLinks />
        </div>
    }
}
