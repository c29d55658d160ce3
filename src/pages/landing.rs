use yew::prelude::*;

use crate::appointment::AppointmentSection;
use crate::scroll::ScrollLink;
use crate::visibility::{use_reveal, LazyImage};

#[derive(Properties, PartialEq)]
pub struct TrustBadgeProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub text: AttrValue,
}

#[function_component(TrustBadge)]
pub fn trust_badge(props: &TrustBadgeProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!("trust-badge", reveal.class())}>
            <span class="trust-icon">{ props.icon.clone() }</span>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.text.clone() }</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Care for the whole family, close to home"}</h1>
                    <p>{"Same-week appointments with our GPs, nurses and specialists."}</p>
                    <ScrollLink href="#appointment" class="cta-button">{"Book an appointment"}</ScrollLink>
                    <ScrollLink href="#pricing" class="secondary-button">{"See pricing"}</ScrollLink>
                </div>
                <LazyImage class="hero-image" src="/assets/clinic-front.jpg" alt="The clinic entrance" />
            </section>

            <section id="services" class="services">
                <h2>{"Services"}</h2>
                <div class="service-grid">
                    <div class="service-card">
                        <LazyImage src="/assets/checkup.jpg" alt="Doctor during a check-up" />
                        <h3>{"General practice"}</h3>
                        <p>{"Check-ups, prescriptions and referrals."}</p>
                    </div>
                    <div class="service-card">
                        <LazyImage src="/assets/vaccination.jpg" alt="Nurse preparing a vaccine" />
                        <h3>{"Vaccinations"}</h3>
                        <p>{"Travel, seasonal and childhood vaccines."}</p>
                    </div>
                    <div class="service-card">
                        <LazyImage src="/assets/pediatrics.jpg" alt="Pediatric consultation room" />
                        <h3>{"Pediatrics"}</h3>
                        <p>{"Dedicated care for children and teens."}</p>
                    </div>
                </div>
            </section>

            <section id="trust" class="trust">
                <h2>{"Why patients choose us"}</h2>
                <div class="trust-badges">
                    <TrustBadge icon="⭐" title="4.9 rating" text="From over 1,200 patient reviews." />
                    <TrustBadge icon="🩺" title="Accredited" text="Fully licensed practice since 2004." />
                    <TrustBadge icon="⏱️" title="Short waits" text="Most visits start within 10 minutes." />
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2>{"Pricing"}</h2>
                <div class="pricing-grid">
                    <div class="price-card">
                        <h3>{"Consultation"}</h3>
                        <p class="price">{"€45"}</p>
                        <ScrollLink href="#appointment" class="price-link">{"Book now"}</ScrollLink>
                    </div>
                    <div class="price-card">
                        <h3>{"Annual check-up"}</h3>
                        <p class="price">{"€90"}</p>
                        <ScrollLink href="#appointment" class="price-link">{"Book now"}</ScrollLink>
                    </div>
                </div>
            </section>

            <AppointmentSection />

            <footer class="footer">
                <p>{"Northside Family Clinic · 12 Harbour Road"}</p>
                <ScrollLink href="#" class="back-to-top">{"Back to top"}</ScrollLink>
            </footer>
        </main>
    }
}
