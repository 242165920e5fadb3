use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dashboard", version, about = "Admin dashboard for the platform API")]
pub struct Cli {
    /// API root to talk to (overrides the `api.base_url` setting).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Write debug-level entries to the log file.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in as an admin and remember the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the logged-in admin.
    Whoami,
    /// List a resource as a table.
    List(ListArgs),
    /// Print every field of one item.
    Show {
        /// users, posts, ads or vendors.
        resource: String,
        id: String,
    },
    /// Delete one item.
    Delete {
        /// users, posts, ads, vendors or comments.
        resource: String,
        id: String,
    },
    /// Moderate an ad.
    #[command(subcommand)]
    Ad(AdCommand),
    /// Manage vendors.
    #[command(subcommand)]
    Vendor(VendorCommand),
    /// Manage admin accounts.
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Read or change stored settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct ListArgs {
    /// users, posts, ads, vendors or comments.
    pub resource: String,

    /// Keep rows where any column contains this text.
    #[arg(long)]
    pub search: Option<String>,

    /// Match the search term fuzzily instead of as a substring.
    #[arg(long)]
    pub fuzzy: bool,

    /// Column key or title to sort by.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the `table.page_size` setting).
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Ad whose comments to list (required for `comments`).
    #[arg(long)]
    pub ad: Option<String>,

    /// Server-side ad status filter.
    #[arg(long)]
    pub status: Option<String>,

    /// Server-side ad category filter.
    #[arg(long)]
    pub category: Option<String>,

    /// How many ads to fetch from the server.
    #[arg(long, default_value_t = 100)]
    pub limit: u32,
}

#[derive(Subcommand)]
pub enum AdCommand {
    /// Approve an ad (sets it active).
    Approve { id: String },
    /// Pause an ad.
    Pause { id: String },
    /// Reject an ad.
    Reject {
        id: String,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum VendorCommand {
    /// Mark a vendor as validated.
    Validate {
        id: String,
        /// Remove the validation instead.
        #[arg(long)]
        revoke: bool,
    },
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Register a new admin account.
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print a setting (or all of them).
    Get { key: Option<String> },
    /// Store a setting.
    Set { key: String, value: String },
    /// Remove a stored setting, restoring its default.
    Unset { key: String },
}
