use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ns-seed")]
#[command(about = "Provision the NileSeat tenant, first admin and demo desks")]
#[command(version)]
pub struct Cli {
    /// Directory tenant to provision (defaults to seed.tenant_id, then auth.tenant_id)
    #[arg(long)]
    pub tenant_id: Option<String>,

    /// Email of the first admin (defaults to seed.admin_email)
    #[arg(long)]
    pub admin_email: Option<String>,

    /// Validate configuration and print the resolved seed inputs without writing
    #[arg(long)]
    pub dry_run: bool,
}
