use super::HandlerContext;
use crate::args::CollectArgs;
use crate::presentation::presenters;
use anyhow::Result;
use scrapediag_runtime::{CollectOptions, Collector, DebugQuery, Error, TradesQuery};

impl From<CollectArgs> for CollectOptions {
    fn from(args: CollectArgs) -> Self {
        CollectOptions {
            debug: DebugQuery {
                use_playwright: args.use_playwright,
                test_date_range: args.test_date_range,
                test_trade_type: args.test_trade_type,
                test_asset_type: args.test_asset_type,
            },
            trades: TradesQuery {
                start_date: args.start_date,
                end_date: args.end_date,
                trade_type: args.trade_type,
                include_stock: args.include_stock,
                include_option: args.include_option,
            },
        }
    }
}

pub fn handle(ctx: &HandlerContext, args: CollectArgs) -> Result<()> {
    let collector = Collector::new(&ctx.config, args.into())?;

    match collector.run() {
        Ok(report) => ctx.render(presenters::present_collection(&report)),
        Err(Error::Unreachable {
            base_url,
            start_hint,
        }) => {
            if ctx.format == crate::types::OutputFormat::Json {
                ctx.render(presenters::present_ping(&base_url, false, &start_hint))?;
            }
            Err(ctx.unreachable(&base_url, &start_hint))
        }
        Err(e) => Err(e.into()),
    }
}
