use clap::{Parser, Subcommand};
use fund_tracker::{
    config::Settings,
    dashboard::DashboardService,
    store::{MemoryStore, MetricsStore},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "fund-tracker")]
#[clap(about = "Track fundraising rewards and leaderboard standings", long_about = None)]
struct Cli {
    /// Settings file (falls back to config/default, config/local, env)
    #[clap(short, long)]
    config: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show reward tier progress for a participant
    Rewards {
        /// Participant email
        #[clap(short, long)]
        email: String,
    },

    /// Show the ranked leaderboard with podium and summary
    Leaderboard,

    /// Show campaign-wide statistics
    Stats,

    /// Show the recent activity feed
    Activity {
        /// Maximum number of entries
        #[clap(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new().unwrap_or_else(|_| {
            info!("Using default settings");
            Settings::default()
        }),
    };

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    let store = MemoryStore::from_files(
        &settings.data.users_file,
        &settings.data.rewards_file,
        &settings.data.activities_file,
    )?;
    let service = DashboardService::new(Arc::new(store) as Arc<dyn MetricsStore>);
    let currency = &settings.display.currency_symbol;

    match cli.command {
        Commands::Rewards { email } => {
            let statuses = service.reward_progress(&email).await?;
            let unlocked = statuses.iter().filter(|s| s.unlocked).count();

            println!("\n=== Rewards for {} ===", email);
            println!("Unlocked: {}/{}", unlocked, statuses.len());
            for status in &statuses {
                let marker = if status.unlocked { "[x]" } else { "[ ]" };
                println!(
                    "{} {} {} - {} ({}% of {})",
                    marker,
                    status.tier.icon,
                    status.tier.title,
                    status.tier.description,
                    status.progress_percent.round_dp(0),
                    status.tier.target,
                );
            }
        }

        Commands::Leaderboard => {
            let board = service.leaderboard().await?;

            println!("\n=== Leaderboard ===");
            if let Some(podium) = board.podium() {
                println!("Top performers:");
                for entry in podium {
                    println!(
                        "  #{} {} {} - {}{}",
                        entry.rank,
                        entry.first_name.as_deref().unwrap_or(""),
                        entry.last_name.as_deref().unwrap_or(""),
                        currency,
                        entry.donations_raised.round_dp(2),
                    );
                }
                println!();
            }
            for entry in &board.entries {
                println!(
                    "#{:<3} {:<30} {:<22} {}{}",
                    entry.rank,
                    entry.email,
                    entry.referral_code,
                    currency,
                    entry.donations_raised.round_dp(2),
                );
            }
            println!(
                "\nParticipants: {}  Total raised: {}{}  Average: {}{}",
                board.summary.total_participants,
                currency,
                board.summary.total_raised.round_dp(2),
                currency,
                board.summary.average_raised.round_dp(2),
            );
        }

        Commands::Stats => {
            let stats = service.campaign_stats().await?;

            println!("\n=== Campaign Stats ===");
            println!("Total users: {}", stats.total_users);
            println!(
                "Total donations: {}{}",
                currency,
                stats.total_donations.round_dp(2)
            );
            println!("Total referrals: {}", stats.total_referrals);
            println!(
                "Average donation: {}{}",
                currency,
                stats.average_donation.round_dp(2)
            );
            println!("\nBy department:");
            for (dept, dept_stats) in &stats.departments {
                println!(
                    "  {:<28} {:>3} users  {}{}",
                    dept,
                    dept_stats.count,
                    currency,
                    dept_stats.donations.round_dp(2),
                );
            }
        }

        Commands::Activity { limit } => {
            let limit = limit.unwrap_or(settings.display.recent_activity_limit);
            let activities = service.recent_activity(limit).await?;

            println!("\n=== Recent Activity ===");
            if activities.is_empty() {
                println!("No recent activities");
            }
            for activity in &activities {
                println!(
                    "{}  {} ({})",
                    activity.timestamp.format("%Y-%m-%d %H:%M"),
                    activity.headline(),
                    activity.description,
                );
            }
        }
    }

    Ok(())
}
