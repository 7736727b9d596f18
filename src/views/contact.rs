use strum::IntoEnumIterator;

use crate::models::form::{Banner, QuoteForm};
use crate::models::quote::{Field, PropertyType, ServiceKind};
use crate::services::content::{self, WHY_CHOOSE_US};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::views::layout;

fn field_error(form: &QuoteForm, field: Field) -> String {
    match form.errors().get(field) {
        Some(message) => format!(
            r#"<p class="field-error" id="{}-error">{}</p>"#,
            field.form_name(),
            encode_text(message)
        ),
        None => String::new(),
    }
}

fn invalid_class(form: &QuoteForm, field: Field) -> &'static str {
    if form.errors().get(field).is_some() {
        r#" class="invalid""#
    } else {
        ""
    }
}

fn text_input(form: &QuoteForm, field: Field, label: &str, input_type: &str, placeholder: &str) -> String {
    let name = field.form_name();
    let placeholder = if placeholder.is_empty() {
        String::new()
    } else {
        format!(r#" placeholder="{}""#, encode_double_quoted_attribute(placeholder))
    };
    format!(
        r#"<div class="form-field"><label for="{name}">{label} *</label><input id="{name}" name="{name}" type="{input_type}" value="{value}"{invalid}{placeholder}>{error}</div>"#,
        name = name,
        label = label,
        input_type = input_type,
        value = encode_double_quoted_attribute(form.values().value(field)),
        invalid = invalid_class(form, field),
        placeholder = placeholder,
        error = field_error(form, field),
    )
}

fn select_input<'a>(
    form: &QuoteForm,
    field: Field,
    label: &str,
    prompt: &str,
    options: impl Iterator<Item = (String, &'a str)>,
) -> String {
    let name = field.form_name();
    let current = form.values().value(field);
    let options: String = options
        .map(|(value, text)| {
            let selected = if value == current { " selected" } else { "" };
            format!(r#"<option value="{}"{}>{}</option>"#, encode_double_quoted_attribute(&value), selected, encode_text(text))
        })
        .collect();
    format!(
        r#"<div class="form-field"><label for="{name}">{label} *</label><select id="{name}" name="{name}"{invalid}><option value="">{prompt}</option>{options}</select>{error}</div>"#,
        name = name,
        label = label,
        invalid = invalid_class(form, field),
        prompt = prompt,
        options = options,
        error = field_error(form, field),
    )
}

fn banner(form: &QuoteForm) -> String {
    match form.banner() {
        Some(Banner::Success) => format!(
            r#"<div class="banner success" role="status">{}</div>"#,
            encode_text(Banner::Success.text())
        ),
        Some(Banner::Error) => format!(
            r#"<div class="banner error" role="alert">{} <a href="{}">{}</a></div>"#,
            encode_text(Banner::Error.text()),
            content::tel_link(),
            content::PHONE_DISPLAY
        ),
        None => String::new(),
    }
}

/// Render the quote form in its current state.
pub fn quote_form(form: &QuoteForm) -> String {
    let property_types = PropertyType::iter().map(|p| (p.to_string(), p.label()));
    let services: Vec<String> = ServiceKind::iter().map(|s| s.to_string()).collect();
    let service_options = services.iter().map(|s| (s.clone(), s.as_str()));

    let message = form.values().value(Field::Message);

    // The submit button is disabled while the browser waits on the response
    // so the same form cannot be posted twice.
    format!(
        r#"<div class="card form-card">
<h2>Get Your Free Quote</h2>
<p>Fill out the form below and we'll contact you within 2 hours with a personalized quote.</p>
{banner}
<form method="post" action="/contact" novalidate onsubmit="this.querySelector('button[type=submit]').disabled=true">
<div class="form-row">{name}{phone}</div>
{email}
{address}
<div class="form-row">{property_type}{service}</div>
<div class="form-field"><label for="message">Additional Information</label><textarea id="message" name="message" rows="4" placeholder="Tell us about any specific concerns or questions you have...">{message}</textarea></div>
<button type="submit" class="button wide">Request Free Quote</button>
<a class="button accent wide" href="{chat}" target="_blank" rel="noopener noreferrer">Get Quote on WhatsApp</a>
</form>
</div>"#,
        banner = banner(form),
        name = text_input(form, Field::Name, "Full Name", "text", ""),
        phone = text_input(form, Field::Phone, "Phone Number", "tel", ""),
        email = text_input(form, Field::Email, "Email Address", "email", ""),
        address = text_input(form, Field::Address, "Property Address", "text", "Street address, City, State, ZIP"),
        property_type = select_input(form, Field::PropertyType, "Property Type", "Select property type", property_types),
        service = select_input(form, Field::ServiceNeeded, "Service Needed", "Select service", service_options),
        message = encode_text(message),
        chat = encode_double_quoted_attribute(&content::whatsapp_link(content::QUOTE_CHAT_MESSAGE)),
    )
}

pub fn render(form: &QuoteForm) -> String {
    let channels: String = content::contact_channels()
        .iter()
        .map(|c| {
            let details = match &c.action {
                Some(href) => format!(r#"<a href="{}">{}</a>"#, encode_double_quoted_attribute(href), c.details),
                None => format!("<div>{}</div>", c.details),
            };
            format!(
                r#"<div class="card center"><h3>{}</h3>{}<p class="small">{}</p></div>"#,
                c.title, details, c.subtitle
            )
        })
        .collect();

    let reasons: String = WHY_CHOOSE_US
        .iter()
        .map(|r| format!(r#"<li class="check">{}</li>"#, encode_text(r)))
        .collect();

    let body = format!(
        r#"<section class="hero small">
<div class="container center">
<h1>Contact Us</h1>
<p class="lead">Ready to improve your indoor air quality? Get your free quote today and join thousands of satisfied customers nationwide.</p>
</div>
</section>

<section class="band">
<div class="container grid two">
{form}
<div>
<h2>Get In Touch</h2>
<p>Contact us today for immediate assistance. Our certified technicians are ready to help improve your indoor air quality.</p>
<div class="grid two">{channels}</div>
<div class="card"><h3>Why Choose Us?</h3><ul class="checklist">{reasons}</ul></div>
<div class="card warning"><h3>Emergency Service</h3><p>Need immediate assistance? We offer 24/7 emergency duct cleaning services for urgent situations like water damage, mold discovery, or severe air quality issues.</p></div>
</div>
</div>
</section>

<section class="band muted">
<div class="container center">
<h2>Nationwide Service Coverage</h2>
<p class="sub">We proudly serve customers across all 50 states with the same high-quality, professional air duct cleaning services.</p>
<div class="grid two">
<div class="card"><h3>Residential Services</h3><p>Professional duct cleaning for homes, apartments, and condos. Improve your family's indoor air quality and reduce energy costs.</p></div>
<div class="card"><h3>Commercial Services</h3><p>Comprehensive duct cleaning for offices, retail spaces, restaurants, and industrial facilities. Maintain healthy work environments.</p></div>
</div>
</div>
</section>

<section class="hero cta">
<div class="container center">
<h2>Don't Wait - Call Today!</h2>
<p class="lead">The sooner you clean your air ducts, the sooner you'll breathe cleaner air and save money on energy bills.</p>
<div class="actions">
<a class="button accent" href="{tel}">Call {phone}</a>
<a class="button ghost" href="{chat}" target="_blank" rel="noopener noreferrer">Get Quote on WhatsApp</a>
</div>
<p class="note">&#10003; Free Estimates &#10003; NADCA Certified &#10003; 30-Day Guarantee &#10003; Licensed &amp; Insured</p>
</div>
</section>"#,
        form = quote_form(form),
        channels = channels,
        reasons = reasons,
        tel = content::tel_link(),
        phone = content::PHONE_DISPLAY,
        chat = encode_double_quoted_attribute(&content::whatsapp_link(content::QUOTE_CHAT_MESSAGE)),
    );

    layout("Contact Us", "/contact", &body)
}
