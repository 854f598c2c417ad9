//! `jobboard` command-line tool

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jobboard_client::{ApiClient, ClientConfig, Session, SessionStore};
use jobboard_core::domain::JobFilter;
use jobboard_core::dto::{
    ApplyRequest, AuthResponse, CreateCompanyRequest, CreateJobRequest, LoginRequest,
    RegisterRequest, SkillsInput, UpdateJobRequest, UpdateProfileRequest, UpdateStatusRequest,
};
use jobboard_shared::EntityId;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jobboard", version, about = "Job Board API client")]
struct Cli {
    /// API server root
    #[arg(long, env = "JOBBOARD_URL", default_value = "http://localhost:5000", global = true)]
    url: String,

    /// Session file (defaults to the OS config directory)
    #[arg(long, env = "JOBBOARD_SESSION", global = true)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and log in
    Register(RegisterArgs),
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user as the server sees it
    Whoami,
    #[command(subcommand)]
    Jobs(JobsCommand),
    #[command(subcommand)]
    Companies(CompaniesCommand),
    /// Apply to a job (candidate)
    Apply {
        job_id: EntityId,
        #[arg(long)]
        cover_letter: Option<String>,
        #[arg(long)]
        resume_url: Option<String>,
    },
    #[command(subcommand)]
    Applications(ApplicationsCommand),
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Upload a file and print its URL
    Upload { path: PathBuf },
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    name: String,
    /// CANDIDATE (default) or EMPLOYER
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    phone_number: Option<String>,
    #[arg(long)]
    gender: Option<String>,
}

#[derive(Args, Debug, Default)]
struct JobFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    requirements: Option<String>,
    #[arg(long)]
    salary: Option<String>,
    #[arg(long)]
    location: Option<String>,
    /// FULL_TIME, PART_TIME, CONTRACT, INTERNSHIP or REMOTE
    #[arg(long = "type")]
    job_type: Option<String>,
    #[arg(long)]
    company_id: Option<EntityId>,
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Public job listing
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        company_id: Option<EntityId>,
    },
    Show { id: EntityId },
    /// Post a job (employer)
    Create(JobFields),
    Update {
        id: EntityId,
        #[command(flatten)]
        fields: JobFields,
    },
    Delete { id: EntityId },
    /// Jobs posted by the logged-in employer
    Mine,
}

#[derive(Subcommand, Debug)]
enum CompaniesCommand {
    /// Most recent companies
    List,
    Mine,
    Show { id: EntityId },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        logo: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ApplicationsCommand {
    /// Applications submitted by the logged-in candidate
    Mine,
    /// Applications across the employer's jobs
    Employer,
    /// Applications for one job
    Job { job_id: EntityId },
    /// Move an application to APPLIED, REVIEWING, INTERVIEW, OFFER or REJECTED
    Status { id: EntityId, status: String },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        headline: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        /// Comma-separated list
        #[arg(long)]
        skills: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
        #[arg(long)]
        profile_picture: Option<String>,
        #[arg(long)]
        github_url: Option<String>,
        #[arg(long)]
        linkedin_url: Option<String>,
        #[arg(long)]
        gender: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    Stats,
    Users,
    User { id: EntityId },
    DeleteUser { id: EntityId },
}

impl From<JobFields> for CreateJobRequest {
    fn from(f: JobFields) -> Self {
        Self {
            title: f.title,
            description: f.description,
            requirements: f.requirements,
            salary: f.salary,
            location: f.location,
            job_type: f.job_type,
            company_id: f.company_id,
        }
    }
}

impl From<JobFields> for UpdateJobRequest {
    fn from(f: JobFields) -> Self {
        Self {
            title: f.title,
            description: f.description,
            requirements: f.requirements,
            salary: f.salary,
            location: f.location,
            job_type: f.job_type,
            company_id: f.company_id,
        }
    }
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn remember(store: &SessionStore, auth: AuthResponse) -> Result<()> {
    let session = Session {
        token: auth.token,
        user: auth.user,
    };
    store
        .save(&session)
        .with_context(|| format!("failed to write {}", store.path().display()))?;
    print(&session.user)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = cli
        .session
        .map(SessionStore::at)
        .unwrap_or_else(SessionStore::default_location);

    let mut client = ApiClient::new(ClientConfig {
        base_url: cli.url,
        ..Default::default()
    })?;
    if let Some(session) = store.load()? {
        client.set_token(Some(session.token));
    }

    match cli.command {
        Command::Register(args) => {
            let auth = client
                .register(&RegisterRequest {
                    email: Some(args.email),
                    password: Some(args.password),
                    name: Some(args.name),
                    role: args.role,
                    phone_number: args.phone_number,
                    location: args.location,
                    username: args.username,
                    gender: args.gender,
                })
                .await?;
            remember(&store, auth)?;
        }
        Command::Login { email, password } => {
            let auth = client.login(&LoginRequest::new(email, password)).await?;
            remember(&store, auth)?;
        }
        Command::Logout => {
            if store.clear()? {
                eprintln!("Logged out");
            } else {
                eprintln!("No session to clear");
            }
        }
        Command::Whoami => print(&client.me().await?)?,
        Command::Jobs(cmd) => match cmd {
            JobsCommand::List { search, company_id } => {
                print(&client.list_jobs(&JobFilter { search, company_id }).await?)?
            }
            JobsCommand::Show { id } => print(&client.get_job(id).await?)?,
            JobsCommand::Create(fields) => print(&client.create_job(&fields.into()).await?)?,
            JobsCommand::Update { id, fields } => {
                print(&client.update_job(id, &fields.into()).await?)?
            }
            JobsCommand::Delete { id } => print(&client.delete_job(id).await?)?,
            JobsCommand::Mine => print(&client.employer_jobs().await?)?,
        },
        Command::Companies(cmd) => match cmd {
            CompaniesCommand::List => print(&client.list_companies().await?)?,
            CompaniesCommand::Mine => print(&client.my_companies().await?)?,
            CompaniesCommand::Show { id } => print(&client.get_company(id).await?)?,
            CompaniesCommand::Create {
                name,
                description,
                website,
                location,
                logo,
            } => print(
                &client
                    .create_company(&CreateCompanyRequest {
                        name: Some(name),
                        description,
                        website,
                        location,
                        logo,
                    })
                    .await?,
            )?,
        },
        Command::Apply {
            job_id,
            cover_letter,
            resume_url,
        } => print(
            &client
                .apply(&ApplyRequest {
                    job_id: Some(job_id),
                    cover_letter,
                    resume_url,
                })
                .await?,
        )?,
        Command::Applications(cmd) => match cmd {
            ApplicationsCommand::Mine => print(&client.my_applications().await?)?,
            ApplicationsCommand::Employer => print(&client.employer_applications().await?)?,
            ApplicationsCommand::Job { job_id } => {
                print(&client.job_applications(job_id).await?)?
            }
            ApplicationsCommand::Status { id, status } => print(
                &client
                    .update_application_status(id, &UpdateStatusRequest { status: Some(status) })
                    .await?,
            )?,
        },
        Command::Profile(cmd) => match cmd {
            ProfileCommand::Show => print(&client.profile().await?)?,
            ProfileCommand::Update {
                headline,
                bio,
                skills,
                location,
                phone_number,
                profile_picture,
                github_url,
                linkedin_url,
                gender,
            } => print(
                &client
                    .update_profile(&UpdateProfileRequest {
                        headline,
                        location,
                        phone_number,
                        profile_picture,
                        github_url,
                        linkedin_url,
                        gender,
                        bio,
                        skills: skills.map(SkillsInput::Text),
                        ..Default::default()
                    })
                    .await?,
            )?,
        },
        Command::Upload { path } => print(&client.upload(&path).await?)?,
        Command::Admin(cmd) => match cmd {
            AdminCommand::Stats => print(&client.admin_stats().await?)?,
            AdminCommand::Users => print(&client.admin_users().await?)?,
            AdminCommand::User { id } => print(&client.admin_user(id).await?)?,
            AdminCommand::DeleteUser { id } => print(&client.admin_delete_user(id).await?)?,
        },
    }

    Ok(())
}
