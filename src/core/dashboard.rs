//! Page layout and the ticker callback

use chrono::NaiveDate;
use minijinja::{context, Environment};
use serde::Serialize;
use serde_json::Value;

use crate::charts::{self, plotly, Chart, Orientation};
use crate::config::RANKING_TOP_N;
use crate::error::Result;
use crate::models::{Ranking, Symbol, SymbolSeries};
use crate::services::ShortVolumeProvider;

pub const APP_TITLE: &str = "Short Volume Analysis";
pub const HEADER_TEXT: &str = "Select a ticker";

/// The two panels that follow the dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolCharts {
    pub symbol: String,
    pub latest_day: String,
    pub pvo: Chart,
    pub long_short: Chart,
}

impl SymbolCharts {
    pub fn build(series: &SymbolSeries) -> Self {
        Self {
            symbol: series.symbol.clone(),
            latest_day: series.latest_day_label(),
            pvo: charts::pvo_chart(&series.points),
            long_short: charts::long_short_chart(&series.points),
        }
    }
}

/// Everything computed once at startup. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub default_symbol: Symbol,
    pub choices: Vec<Symbol>,
    pub initial: SymbolCharts,
    pub ranking_day: NaiveDate,
    pub ranking_chart: Chart,
}

impl Dashboard {
    pub fn new(default_symbol: Symbol, series: &SymbolSeries, ranking: &Ranking) -> Self {
        Self {
            default_symbol,
            choices: ranking.choices(),
            initial: SymbolCharts::build(series),
            ranking_day: ranking.day,
            ranking_chart: charts::ranking_chart(ranking, RANKING_TOP_N, Orientation::Vertical),
        }
    }

    /// Dropdown entries: the choice set, with the default symbol in front
    /// when the ranking does not contain it.
    pub fn dropdown_options(&self) -> Vec<String> {
        let default = &self.default_symbol;
        let options = self.choices.iter().map(Symbol::to_string);
        if self.choices.contains(default) {
            return options.collect();
        }
        std::iter::once(default.to_string()).chain(options).collect()
    }

    pub fn render_page(&self) -> Result<String> {
        let mut env = Environment::new();
        env.add_template("index.html", PAGE_TEMPLATE)?;
        let template = env.get_template("index.html")?;

        let page = template.render(context! {
            title => APP_TITLE,
            header => HEADER_TEXT,
            options => self.dropdown_options(),
            selected => self.default_symbol.as_str(),
            pvo_figure => script_json(&plotly::to_figure(&self.initial.pvo))?,
            long_short_figure => script_json(&plotly::to_figure(&self.initial.long_short))?,
            ranking_figure => script_json(&plotly::to_figure(&self.ranking_chart))?,
        })?;
        Ok(page)
    }
}

/// Fetch a symbol and rebuild the two dependent charts
pub async fn update_charts(
    provider: &(dyn ShortVolumeProvider + Send + Sync),
    symbol: &Symbol,
) -> Result<SymbolCharts> {
    let series = provider.fetch_symbol_series(symbol).await?;
    Ok(SymbolCharts::build(&series))
}

/// JSON that can sit inside a `<script>` element
fn script_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>{{ title }}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" />
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
      .app-header { font-size: 1.5rem; margin: 1rem 0 0.5rem; }
      .chart-error { color: #b02a37; padding: 2rem; }
    </style>
  </head>
  <body>
    <div class="container-fluid">
      <div class="row"><div class="col"><div class="app-header">{{ header }}</div></div></div>
      <div class="row">
        <div class="col">
          <select id="ticker-dropdown" class="form-select">
            {% for option in options %}<option value="{{ option }}"{% if option == selected %} selected{% endif %}>{{ option }}</option>
            {% endfor %}
          </select>
        </div>
      </div>
      <div class="row">
        <div class="col"><div id="pvo-chart"></div></div>
        <div class="col"><div id="long-short-chart"></div></div>
        <div class="col"></div>
      </div>
      <div class="row">
        <div class="col"><div id="ranking-chart"></div></div>
        <div class="col"></div>
      </div>
    </div>
    <script>
      const figures = {
        "pvo-chart": {{ pvo_figure|safe }},
        "long-short-chart": {{ long_short_figure|safe }},
        "ranking-chart": {{ ranking_figure|safe }}
      };
      for (const [id, fig] of Object.entries(figures)) {
        Plotly.newPlot(id, fig.data, fig.layout);
      }

      function showError(id, message) {
        Plotly.purge(id);
        const el = document.getElementById(id);
        el.innerHTML = "";
        const div = document.createElement("div");
        div.className = "chart-error";
        div.textContent = message;
        el.appendChild(div);
      }

      document.getElementById("ticker-dropdown").addEventListener("change", async (event) => {
        const symbol = encodeURIComponent(event.target.value);
        try {
          const response = await fetch(`/api/charts/${symbol}`);
          if (!response.ok) {
            throw new Error((await response.json()).error || response.statusText);
          }
          const charts = await response.json();
          for (const [id, fig] of [["pvo-chart", charts.pvo], ["long-short-chart", charts.long_short]]) {
            document.getElementById(id).innerHTML = "";
            Plotly.react(id, fig.data, fig.layout);
          }
        } catch (err) {
          showError("pvo-chart", `Callback error: ${err.message}`);
          showError("long-short-chart", `Callback error: ${err.message}`);
        }
      });
    </script>
  </body>
</html>
"#;
