//! Canned service responses.

use crate::server::{StubResponse, StubServer, StubServerBuilder};
use anyhow::Result;
use serde_json::{Value, json};

/// Two tables, two trade-class elements, one politician mention, no dollar signs.
pub const TWO_TABLE_DEBUG_PAYLOAD: &str = r#"{"tables_found": 2, "trade_indicators": {"elements_with_trade_class": ["a","b"], "elements_with_dollar_signs": [], "politician_mentions": ["Smith"]}, "table_analysis": [{"table_index":0,"row_count":10,"table_classes":["trades"]},{"table_index":1,"row_count":0,"table_classes":[]}]}"#;

/// A trades page in the shape the scraper targets: a table of `tr.q-tr` rows.
pub const TRADES_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Trades | Capitol Trades</title></head>
<body>
<table class="q-table">
<thead><tr><th>Politician</th><th>Traded Issuer</th><th>Size</th></tr></thead>
<tbody>
<tr class="q-tr"><td>Nancy Pelosi</td><td>Broadcom Inc AVGO:US</td><td>$1M-5M</td></tr>
<tr class="q-tr"><td>Nancy Pelosi</td><td>NVIDIA Corp NVDA:US</td><td>$250K-500K</td></tr>
</tbody>
</table>
</body></html>
"#;

/// A challenge interstitial served instead of the real page.
pub const CHALLENGE_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Just a moment...</title></head>
<body><div id="cf-challenge-running"></div>
<script src="/cdn-cgi/challenge-platform/h/b/orchestrate/jsch/v1"></script>
</body></html>
"#;

pub fn root_payload() -> Value {
    json!({ "message": "Capitol Trades API is running" })
}

/// `/soup-content` answer carrying raw markup only.
pub fn soup_payload(raw_html: &str) -> Value {
    json!({ "raw_html": raw_html })
}

pub fn trades_payload() -> Value {
    json!({
        "trades": [
            {
                "senator": "Nancy Pelosi",
                "ticker": "AVGO",
                "trade_type": "buy",
                "size": "$1M-5M"
            }
        ],
        "total_count": 1
    })
}

/// A stub with every endpoint answering healthily.
pub fn healthy_service() -> StubServerBuilder {
    StubServer::builder()
        .route("/", StubResponse::json(root_payload().to_string()))
        .route("/debug", StubResponse::json(TWO_TABLE_DEBUG_PAYLOAD))
        .route(
            "/soup-content",
            StubResponse::json(soup_payload(TRADES_PAGE).to_string()),
        )
        .route("/trades", StubResponse::json(trades_payload().to_string()))
}

pub fn start_healthy_service() -> Result<StubServer> {
    healthy_service().start()
}
