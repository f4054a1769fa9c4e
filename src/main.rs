// Rust client for the Ceph RADOS Gateway Admin Ops API
// Copyright 2026 radosgw-rs contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Small command-line front end for the admin API.
//!
//! ```bash
//! export RADOSGW_API="http://127.0.0.1:7480"
//! export RADOSGW_ACCESS="..."
//! export RADOSGW_SECRET="..."
//! RUST_LOG=debug radosgw user alice
//! ```

use clap::{Parser, Subcommand};
use radosgw::admin::RadosClient;
use radosgw::admin::config::{BucketConfig, UsageConfig};
use radosgw::admin::types::AdminApi;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Gateway endpoint, e.g. http://127.0.0.1:7480
    #[arg(long, env = "RADOSGW_API")]
    api: String,

    #[arg(long, env = "RADOSGW_ACCESS")]
    access_key: String,

    #[arg(long, env = "RADOSGW_SECRET", hide_env_values = true)]
    secret_key: String,

    /// Path prefix of the admin API
    #[arg(long)]
    admin_prefix: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show usage summary, optionally for one user
    Usage {
        #[arg(long)]
        uid: Option<String>,
    },
    /// Show one user
    User { uid: String },
    /// Show every user
    Users,
    /// List buckets with their statistics
    Buckets {
        #[arg(long)]
        uid: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher

    let args = Args::parse();
    let client = RadosClient::new(
        &args.api,
        &args.access_key,
        &args.secret_key,
        args.admin_prefix.as_deref(),
    )?;

    match args.command {
        Command::Usage { uid } => {
            let config = UsageConfig::builder()
                .uid(uid.unwrap_or_default())
                .show_summary(true)
                .build();
            let resp = client.get_usage(config).build().send().await?;
            print_json(resp.usage())?;
        }
        Command::User { uid } => {
            let resp = client.get_user(uid).build().send().await?;
            print_json(resp.user())?;
        }
        Command::Users => {
            let resp = client.get_users().build().send().await?;
            print_json(&resp.users())?;
        }
        Command::Buckets { uid } => {
            let config = BucketConfig::builder()
                .uid(uid.unwrap_or_default())
                .stats(true)
                .build();
            let resp = client.get_bucket(config).build().send().await?;
            print_json(&resp.buckets())?;
        }
    }
    Ok(())
}
