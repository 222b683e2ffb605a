//! Text output formatting with colors.

use apiagg_core::{CatFactsPage, ProviderKind, Repository, WeatherReport};
use apiagg_providers::{AggregateRequest, AggregateView};
use chrono::Local;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Kelvin offset; the weather API reports Kelvin unless told otherwise.
const KELVIN_OFFSET: f64 = 273.15;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a page of cat facts.
    pub fn format_facts(&self, page: Option<&CatFactsPage>) -> String {
        let mut lines = vec![self.bold(ProviderKind::CatFacts.display_name())];

        let Some(page) = page else {
            lines.push(self.unavailable());
            return lines.join("\n");
        };

        if page.data.is_empty() {
            lines.push(self.dim("  (no facts on this page)"));
        }
        for fact in &page.data {
            lines.push(format!("  • {}", fact.fact));
        }

        let mut footer = format!("page {}", page.current_page);
        if let Some(last) = page.last_page {
            footer.push_str(&format!(" of {}", last));
        }
        if let Some(total) = page.total {
            footer.push_str(&format!(", {} facts total", total));
        }
        lines.push(self.dim(&format!("  {}", footer)));

        lines.join("\n")
    }

    /// Formats a user's repositories.
    pub fn format_repositories(&self, username: &str, repos: &[Repository]) -> String {
        let mut lines = vec![self.bold(&format!(
            "{} ({})",
            ProviderKind::RepositoryHost.display_name(),
            username
        ))];

        if repos.is_empty() {
            lines.push(self.dim("  no repositories (or unavailable)"));
            return lines.join("\n");
        }

        for repo in repos {
            let mut line = format!("  {}", self.cyan(&repo.full_name));
            if let Some(lang) = &repo.language {
                line.push_str(&format!(" [{}]", lang));
            }
            if repo.stargazers_count > 0 {
                line.push_str(&format!(" ★ {}", repo.stargazers_count));
            }
            if repo.private {
                line.push_str(&format!(" {}", self.yellow("private")));
            }
            lines.push(line);

            if let Some(desc) = repo.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(self.dim(&format!("    {}", desc)));
            }
        }

        lines.join("\n")
    }

    /// Formats a weather report.
    pub fn format_weather(&self, city: &str, report: Option<&WeatherReport>) -> String {
        let mut lines = vec![self.bold(&format!(
            "{} ({})",
            ProviderKind::Weather.display_name(),
            city
        ))];

        let Some(report) = report else {
            lines.push(self.unavailable());
            return lines.join("\n");
        };

        let mut line = format!("  {}: {}", report.name, self.format_temp(report.main.temp));
        if let Some(summary) = report.summary() {
            line.push_str(&format!(", {}", summary));
        }
        lines.push(line);

        if let Some(humidity) = report.main.humidity {
            lines.push(self.dim(&format!("  humidity {:.0}%", humidity)));
        }
        if let Some(wind) = &report.wind {
            lines.push(self.dim(&format!("  wind {:.1} m/s", wind.speed)));
        }

        lines.join("\n")
    }

    /// Formats every requested slot of an aggregated view.
    pub fn format_view(&self, view: &AggregateView, request: &AggregateRequest) -> String {
        let mut sections = Vec::new();

        if request.fact_limit.is_some() {
            sections.push(self.format_facts(view.cat_facts.as_ref()));
        }
        if let Some(user) = &request.username {
            sections.push(self.format_repositories(user, &view.repositories));
        }
        if let Some(city) = &request.city {
            sections.push(self.format_weather(city, view.weather.as_ref()));
        }

        let fetched = view.fetched_at.with_timezone(&Local);
        sections.push(self.dim(&format!("Fetched at {}", fetched.format("%Y-%m-%d %H:%M:%S"))));

        sections.join("\n\n")
    }

    /// Formats a temperature reading.
    ///
    /// Readings above 150 are taken as Kelvin (the API default) and shown
    /// in Celsius.
    pub fn format_temp(&self, temp: f64) -> String {
        if temp > 150.0 {
            format!("{:.1}°C", temp - KELVIN_OFFSET)
        } else {
            format!("{:.1}°", temp)
        }
    }

    fn unavailable(&self) -> String {
        self.yellow("  unavailable")
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }
}
