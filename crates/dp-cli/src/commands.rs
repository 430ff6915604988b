use dp_cli::{CliClientResult, DealGateway, Notifier, PipelineSession};
use dp_core::{
    CoreError, DealId, DragEnd, DragLocation, FilterCriteria, NewDeal, Priority, Stage,
    ValueBand, Verification,
};

use std::panic::Location;
use std::str::FromStr;

use clap::Subcommand;
use error_location::ErrorLocation;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum Commands {
    /// Show every column with the deals that pass the filters
    Board {
        /// Company, owner, syndicate lead or amount
        #[arg(long, default_value = "")]
        search: String,

        /// High, Medium or Low
        #[arg(long)]
        priority: Option<String>,

        /// Industry the company must list
        #[arg(long)]
        sector: Option<String>,

        /// Verified or "Tier N"
        #[arg(long)]
        verification: Option<String>,

        /// High (>= 100000) or Low
        #[arg(long)]
        value: Option<String>,
    },

    /// Drag a deal to another slot
    Move {
        /// Deal ID
        deal_id: String,

        /// Destination stage
        #[arg(long)]
        to: String,

        /// Destination index (defaults to the end of the column)
        #[arg(long)]
        index: Option<usize>,
    },

    /// Create a deal
    Create {
        #[arg(long)]
        company_id: String,

        #[arg(long, default_value = "inbox")]
        stage: String,

        #[arg(long)]
        amount: f64,

        /// Win probability in percent
        #[arg(long, default_value_t = 10)]
        probability: u8,
    },

    /// Delete every deal in a column
    ClearColumn {
        /// Stage to clear
        stage: String,
    },
}

pub async fn run<G: DealGateway, N: Notifier>(
    command: Commands,
    session: &mut PipelineSession<G, N>,
) -> CliClientResult<Value> {
    match command {
        Commands::Board {
            search,
            priority,
            sector,
            verification,
            value,
        } => {
            let filters = FilterCriteria {
                priority: priority.as_deref().map(Priority::from_str).transpose()?,
                sector,
                verification: verification
                    .as_deref()
                    .map(Verification::from_str)
                    .transpose()?,
                value: value.as_deref().map(ValueBand::from_str).transpose()?,
            };

            session.refresh().await?;
            board_json(session, &filters, &search)
        }

        Commands::Move { deal_id, to, index } => {
            let destination_stage = Stage::from_str(&to)?;
            let deal_id = DealId::from(deal_id);

            session.refresh().await?;
            let Some((stage, from_index)) = session.board().locate(&deal_id) else {
                return Err(CoreError::UnknownDeal {
                    id: deal_id.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
                .into());
            };

            let destination_len = session.board().column(destination_stage).len();
            let last_slot = if destination_stage == stage {
                destination_len.saturating_sub(1)
            } else {
                destination_len
            };
            let source = DragLocation::new(stage, from_index);
            let destination = DragLocation::new(destination_stage, index.unwrap_or(last_slot));

            session.drag_start(deal_id.clone(), source);
            let report = session
                .handle_drag_end(&DragEnd {
                    deal_id,
                    source,
                    destination: Some(destination),
                })
                .await?;

            Ok(serde_json::to_value(report)?)
        }

        Commands::Create {
            company_id,
            stage,
            amount,
            probability,
        } => {
            let deal = NewDeal {
                company_id,
                stage: Stage::from_str(&stage)?,
                amount,
                probability,
            };
            session.create_deal(&deal).await
        }

        Commands::ClearColumn { stage } => {
            let stage = Stage::from_str(&stage)?;
            session.refresh().await?;
            let deleted = session.clear_column(stage).await?;
            Ok(json!({ "stage": stage, "deleted": deleted }))
        }
    }
}

fn board_json<G: DealGateway, N: Notifier>(
    session: &PipelineSession<G, N>,
    filters: &FilterCriteria,
    search: &str,
) -> CliClientResult<Value> {
    let summary = session.summary(filters, search);

    let columns = summary
        .columns
        .iter()
        .map(|column| -> CliClientResult<Value> {
            let deals = session.visible(column.stage, filters, search);
            Ok(json!({
                "id": column.stage,
                "title": column.title,
                "count": column.count,
                "total": column.total_formatted,
                "deals": serde_json::to_value(deals)?,
            }))
        })
        .collect::<CliClientResult<Vec<Value>>>()?;

    Ok(json!({
        "columns": columns,
        "totalCount": summary.total_count,
        "total": summary.total_formatted,
        "sectors": session.board().sectors(),
    }))
}
