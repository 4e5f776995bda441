use clap::Args;
use serde_json::json;

use crate::auth::{Role, TokenService};
use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[arg(long, help = "Subject id embedded in the token")]
    pub user: String,

    #[arg(long, default_value = "user", help = "Role: user or admin")]
    pub role: Role,

    #[arg(long, help = "Override the configured expiry in hours")]
    pub expiry_hours: Option<u64>,
}

pub fn handle(args: TokenArgs, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let expiry_hours = args.expiry_hours.unwrap_or(config.security.jwt_expiry_hours);
    let tokens = TokenService::new(&config.security.jwt_secret, expiry_hours)?;
    let token = tokens.issue(&args.user, args.role)?;
    let expires_in = tokens
        .expiry_hours()
        .checked_mul(3600)
        .ok_or_else(|| anyhow::anyhow!("expiry of {} hours is out of range", expiry_hours))?;

    output_success(
        output_format,
        &format!("Token issued for '{}' ({})", args.user, args.role),
        json!({
            "token": token,
            "user": args.user,
            "role": args.role,
            "expires_in": expires_in,
        }),
        Some(&token),
    )
}
