//! Plain-text rendering of a [`ViewDto`] for the terminal.

use std::fmt::Write;

use atlas_shell::{CountryDto, ViewDto};

const MISSING: &str = "-";

pub fn render_table(view: &ViewDto) -> String {
    let mut out = String::new();

    if view.regions.is_empty() {
        let _ = writeln!(out, "No countries to show.");
        return out;
    }

    let name_width = view
        .regions
        .iter()
        .flat_map(|group| &group.countries)
        .map(|country| country.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Country".len());

    for group in &view.regions {
        let _ = writeln!(out, "\n{} ({})", group.region, group.countries.len());
        let _ = writeln!(
            out,
            "     {:<name_width$}  {:<4}  {:>15}  {:>10}",
            "Country", "Code", "Population", "GDP (US$)"
        );
        for country in &group.countries {
            let _ = writeln!(out, "{}", render_row(country, name_width));
        }
    }

    let shown: usize = view.regions.iter().map(|g| g.countries.len()).sum();
    let _ = writeln!(out, "\n{shown} of {} countries", view.total_countries);
    out
}

fn render_row(country: &CountryDto, name_width: usize) -> String {
    let flag = if country.flag.is_empty() { "  " } else { country.flag.as_str() };
    format!(
        "  {flag} {:<name_width$}  {:<4}  {:>15}  {:>10}",
        country.name,
        country.code,
        country.population.map_or_else(|| MISSING.to_string(), format_population),
        country.gdp.map_or_else(|| MISSING.to_string(), format_gdp),
    )
}

/// `67971311` -> `67,971,311`
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `2.78e12` -> `2.78T`
pub fn format_gdp(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];

    UNITS
        .iter()
        .find(|(scale, _)| value.abs() >= *scale)
        .map(|(scale, unit)| format!("{:.2}{unit}", value / scale))
        .unwrap_or_else(|| format!("{value:.0}"))
}
