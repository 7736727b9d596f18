use crate::services::content::{self, BENEFITS, HOME_HIGHLIGHTS, HOME_PROCESS, STATS, TESTIMONIALS};
use crate::views::layout;

pub fn render() -> String {
    let stats: String = STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat"><div class="stat-number">{}</div><div class="stat-label">{}</div></div>"#,
                stat.number, stat.label
            )
        })
        .collect();

    let highlights: String = HOME_HIGHLIGHTS
        .iter()
        .map(|h| format!(r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#, h.title, h.description))
        .collect();

    let benefits: String = BENEFITS
        .iter()
        .map(|b| format!(r#"<li class="check">{b}</li>"#))
        .collect();

    let process: String = HOME_PROCESS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                r#"<li><span class="step">{}</span><div><h4>{}</h4><p>{}</p></div></li>"#,
                i + 1,
                step.title,
                step.description
            )
        })
        .collect();

    let testimonials: String = TESTIMONIALS
        .iter()
        .map(|t| {
            format!(
                r#"<div class="card testimonial"><div class="stars" aria-label="{rating} stars">{stars}</div><p class="quote">&ldquo;{comment}&rdquo;</p><div class="who"><strong>{name}</strong><span>{location}</span></div></div>"#,
                rating = t.rating,
                stars = "&#9733;".repeat(usize::from(t.rating)),
                comment = t.comment,
                name = t.name,
                location = t.location,
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
<div class="container hero-grid">
<div>
<h1>{business}</h1>
<p class="lead">Breathe easier with professional air duct cleaning. Certified technicians, proven results, and service you can trust in all 50 states.</p>
<ul class="badges"><li class="check">NADCA Certified</li><li class="check">Licensed &amp; Insured</li><li class="check">Nationwide Service</li></ul>
<div class="actions">
<a class="button accent" href="/contact">Get Free Quote</a>
<a class="button ghost" href="{tel}">Call {phone}</a>
</div>
</div>
<div class="panel">
<h3>Why Choose Us?</h3>
<div class="stats">{stats}</div>
</div>
</div>
</section>

<section class="band muted">
<div class="container">
<h2 class="center">Our Services</h2>
<p class="center sub">From homes to businesses, we deliver cleaner air with every visit.</p>
<div class="grid four">{highlights}</div>
</div>
</section>

<section class="band">
<div class="container">
<h2 class="center">See the Difference</h2>
<div class="grid two">
<div class="card"><span class="tag bad">Before</span><h3>Dirty, Clogged Ducts</h3><p>Accumulated dust, debris, and contaminants restrict airflow and reduce air quality.</p></div>
<div class="card"><span class="tag good">After</span><h3>Clean, Fresh Ducts</h3><p>Professional cleaning restores optimal airflow and eliminates contaminants.</p></div>
</div>
</div>
</section>

<section class="band">
<div class="container grid two">
<div>
<h2>Benefits of Professional Duct Cleaning</h2>
<ul class="checklist two-col">{benefits}</ul>
</div>
<div class="card">
<h3>Our Process</h3>
<ol class="process">{process}</ol>
</div>
</div>
</section>

<section class="band muted">
<div class="container center">
<h2>Nationwide Coverage</h2>
<p class="sub">Wherever you are, our certified technicians are ready to help.</p>
<p><strong>Serving All 50 States</strong></p>
<a class="button" href="/contact">Find Service Near You</a>
</div>
</section>

<section class="band">
<div class="container">
<h2 class="center">What Our Customers Say</h2>
<p class="center sub">Real reviews from satisfied customers nationwide</p>
<div class="grid three">{testimonials}</div>
</div>
</section>

<section class="hero cta">
<div class="container center">
<h2>Ready to Breathe Cleaner Air?</h2>
<p class="lead">Schedule your professional duct cleaning today.</p>
<div class="actions">
<a class="button accent" href="/contact">Get Free Quote</a>
<a class="button ghost" href="{tel}">Call {phone}</a>
</div>
<p class="note">24/7 Emergency Service Available</p>
</div>
</section>"#,
        business = content::BUSINESS_NAME,
        tel = content::tel_link(),
        phone = content::PHONE_DISPLAY,
        stats = stats,
        highlights = highlights,
        benefits = benefits,
        process = process,
        testimonials = testimonials,
    );

    layout("Home", "/", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_lists_testimonials_and_stats() {
        let html = render();
        for t in TESTIMONIALS {
            assert!(html.contains(t.name));
        }
        assert!(html.contains("50,000+"));
        assert!(html.contains(r#"href="/contact""#));
    }
}
