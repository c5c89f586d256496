use crate::report::ProjectReport;
use owo_colors::OwoColorize;

const UNCLASSIFIED: &str = "(none)";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Include the per-month rows.
    pub monthly: bool,
    /// Emphasise headings with terminal colors.
    pub color: bool,
}

pub fn render_report(report: &ProjectReport, opts: &RenderOptions) -> String {
    let mut out = String::new();

    let title = match report.facet {
        Some(facet) => format!("{} quarterly usage (by {})", report.project, facet),
        None => format!("{} quarterly usage", report.project),
    };
    out.push_str(&heading(&title, opts.color));
    out.push_str(&format!("{}\n", "=".repeat(title.chars().count())));

    if report.is_empty() {
        out.push_str("<no requests>\n\n");
        return out;
    }

    // Facet column only exists when grouped; width fits the longest value.
    let facet_width = report.facet.map(|facet| {
        report
            .monthly
            .iter()
            .map(|b| b.facet_value.unwrap_or(UNCLASSIFIED).len())
            .chain([facet.as_str().len(), UNCLASSIFIED.len()])
            .max()
            .unwrap_or_default()
    });
    let facet_cell = |value: Option<&str>| match facet_width {
        Some(width) => format!("{:<width$}  ", value.unwrap_or(UNCLASSIFIED)),
        None => String::new(),
    };
    let facet_header = facet_cell(report.facet.map(|f| f.as_str()));

    //-------------------------------------------------------------------------
    // Quarters
    //-------------------------------------------------------------------------
    out.push_str(&format!(
        "{:<6}  {:<3}  {:<10}  {:<10}  {}{:>10}  {:>12}\n",
        "FY", "Qtr", "Start", "End", facet_header, "Requests", "GB"
    ));
    for q in &report.quarterly {
        out.push_str(&format!(
            "FY{:<4}  {:<3}  {:<10}  {:<10}  {}{:>10}  {:>12.4}\n",
            q.fiscal_year,
            q.fiscal_quarter,
            q.start_date,
            q.end_date,
            facet_cell(q.facet_value),
            q.requests,
            q.gb
        ));
    }
    out.push('\n');

    //-------------------------------------------------------------------------
    // Fiscal year totals
    //-------------------------------------------------------------------------
    out.push_str(&heading("Fiscal year totals", opts.color));
    for y in &report.yearly {
        out.push_str(&format!(
            "FY{:<4}  {}{:>10}  {:>12.4}\n",
            y.fiscal_year,
            facet_cell(y.facet_value),
            y.requests,
            y.gb
        ));
    }
    out.push('\n');

    //-------------------------------------------------------------------------
    // Months
    //-------------------------------------------------------------------------
    if opts.monthly {
        out.push_str(&heading("Monthly", opts.color));
        out.push_str(&format!(
            "{:<7}  {:<6}  {:<3}  {:>2}  {}{:>10}  {:>12}\n",
            "Month", "FY", "Qtr", "FM", facet_header, "Requests", "GB"
        ));
        for m in &report.monthly {
            out.push_str(&format!(
                "{:04}-{:02}  FY{:<4}  {:<3}  {:>2}  {}{:>10}  {:>12.4}\n",
                m.calendar_year,
                m.calendar_month,
                m.fiscal.fiscal_year,
                m.fiscal.fiscal_quarter,
                m.fiscal.fiscal_month,
                facet_cell(m.facet_value),
                m.requests,
                m.gb
            ));
        }
        out.push('\n');
    }

    out
}

fn heading(text: &str, color: bool) -> String {
    if color {
        format!("{}\n", text.bold())
    } else {
        format!("{text}\n")
    }
}
