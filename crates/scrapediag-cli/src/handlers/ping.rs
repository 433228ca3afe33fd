use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use scrapediag_runtime::ServiceClient;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let config = &ctx.config;
    let client = ServiceClient::new(&config.base_url, config.timeout())?;
    let running = client.is_alive();

    if running || ctx.format == crate::types::OutputFormat::Json {
        ctx.render(presenters::present_ping(
            client.base_url(),
            running,
            &config.start_hint,
        ))?;
    }

    if running {
        Ok(())
    } else {
        Err(ctx.unreachable(client.base_url(), &config.start_hint))
    }
}
