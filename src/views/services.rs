use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::services::content::{
    self, ServiceOffering, ADDITIONAL_SERVICES, COMMERCIAL_SERVICES, FAQS, PROCESS_STEPS,
    RESIDENTIAL_SERVICES,
};
use crate::views::layout;

fn offering_cards(offerings: &[ServiceOffering]) -> String {
    offerings
        .iter()
        .map(|s| {
            let features: String = s
                .features
                .iter()
                .map(|f| format!(r#"<li class="check">{}</li>"#, encode_text(f)))
                .collect();
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p><ul class="checklist">{}</ul></div>"#,
                encode_text(s.title),
                s.description,
                features
            )
        })
        .collect()
}

pub fn render() -> String {
    let quote_chat_link = content::whatsapp_link(content::QUOTE_CHAT_MESSAGE);
    let schedule_chat_link = content::whatsapp_link(content::SCHEDULE_CHAT_MESSAGE);
    let quote_chat = encode_double_quoted_attribute(&quote_chat_link);
    let schedule_chat = encode_double_quoted_attribute(&schedule_chat_link);

    let additional: String = ADDITIONAL_SERVICES
        .iter()
        .map(|s| {
            format!(
                r#"<div class="card center"><h3>{}</h3><p>{}</p><div class="price">{}</div><a class="button" href="{}" target="_blank" rel="noopener noreferrer">Schedule Service</a></div>"#,
                s.title, s.description, s.price, schedule_chat
            )
        })
        .collect();

    let steps: String = PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                r#"<li><span class="step">{}</span><div><h3>{}</h3><span class="duration">{}</span><p>{}</p></div></li>"#,
                i + 1,
                step.title,
                step.duration,
                step.description
            )
        })
        .collect();

    let faqs: String = FAQS
        .iter()
        .map(|faq| format!(r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#, faq.question, faq.answer))
        .collect();

    let body = format!(
        r#"<section class="hero small">
<div class="container center">
<h1>Our Services</h1>
<p class="lead">Professional air duct cleaning and HVAC services for residential and commercial properties.</p>
<div class="actions">
<a class="button accent" href="{quote_chat}" target="_blank" rel="noopener noreferrer">Get Free Quote</a>
<a class="button ghost" href="{tel}">Call {phone}</a>
</div>
</div>
</section>

<section class="band">
<div class="container">
<h2 class="center">Residential Services</h2>
<p class="center sub">Keep your family healthy with a clean, efficient HVAC system.</p>
<div class="grid three">{residential}</div>
</div>
</section>

<section class="band muted">
<div class="container">
<h2 class="center">Commercial Services</h2>
<p class="center sub">Healthy air for the people who work in and visit your business.</p>
<div class="grid three">{commercial}</div>
</div>
</section>

<section class="band">
<div class="container">
<h2 class="center">Additional Services</h2>
<p class="center sub">Complete indoor air care beyond duct cleaning.</p>
<div class="grid three">{additional}</div>
</div>
</section>

<section class="band muted">
<div class="container narrow">
<h2 class="center">Our Process</h2>
<ol class="process">{steps}</ol>
</div>
</section>

<section class="band">
<div class="container narrow">
<h2 class="center">Frequently Asked Questions</h2>
{faqs}
</div>
</section>

<section class="hero cta">
<div class="container center">
<h2>Ready to Schedule Your Service?</h2>
<p class="lead">Contact us today for a free estimate.</p>
<div class="actions">
<a class="button accent" href="{quote_chat}" target="_blank" rel="noopener noreferrer">Get Quote on WhatsApp</a>
<a class="button ghost" href="{tel}">Call {phone}</a>
</div>
<p class="note">Licensed &amp; Insured &middot; NADCA Certified &middot; 24/7 Emergency Service</p>
</div>
</section>"#,
        quote_chat = quote_chat,
        tel = content::tel_link(),
        phone = content::PHONE_DISPLAY,
        residential = offering_cards(RESIDENTIAL_SERVICES),
        commercial = offering_cards(COMMERCIAL_SERVICES),
        additional = additional,
        steps = steps,
        faqs = faqs,
    );

    layout("Services", "/services", &body)
}
