//! Subcommands and their dispatch
//!
//! Every command prints its result as pretty JSON on stdout. List filters map
//! one to one onto the SDK query types: an omitted flag sends no filter,
//! `--status all` is the same as omitting it, and `--division-id none` asks
//! for records without a division.

use std::future::Future;

use admin_sdk::{
    CreateDivisionRequest, DashboardApi, DepartmentQuery, DepartmentsApi, DivisionQuery,
    DivisionsApi, MemberQuery, RoleQuery, RolesApi, SessionContext, TenantQuery, TenantRequest,
    TenantStatus, TenantUserQuery, TenantUsersApi, TenantsApi, UserQuery, UserStatus, UsersApi,
};
use anyhow::{Context, Result};
use auraflow_sdk::{ApiError, Filter, Id, PageRequest, PagedResponse, StatusFilter, pager};
use clap::{Args, Subcommand};
use futures_util::TryStreamExt;
use serde::Serialize;
use serde_json::json;
use workflow_sdk::{
    ExecuteActionRequest, StepTasksApi, TaskPriority, TaskQuery, TaskStatus, TasksApi,
};

use crate::context::AppContext;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the signed-in user
    Me,
    /// Show tenant, user and role totals
    Dashboard,
    /// Manage tenants
    #[command(subcommand)]
    Tenants(TenantsCommand),
    /// Manage users across tenants
    #[command(subcommand)]
    Users(UsersCommand),
    /// Manage users of the signed-in administrator's tenant
    #[command(subcommand)]
    TenantUsers(TenantUsersCommand),
    /// Inspect roles
    #[command(subcommand)]
    Roles(RolesCommand),
    /// Manage divisions
    #[command(subcommand)]
    Divisions(DivisionsCommand),
    /// Inspect departments and their members
    #[command(subcommand)]
    Departments(DepartmentsCommand),
    /// Browse tasks and act on workflow steps
    #[command(subcommand)]
    Tasks(TasksCommand),
    /// End the session on the backend
    Logout,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    page: u32,

    /// Page size (defaults to the endpoint's usual size)
    #[arg(long)]
    size: Option<u32>,
}

impl PageArgs {
    fn request(self, default: PageRequest) -> Result<PageRequest, ApiError> {
        PageRequest::new(self.page, self.size.unwrap_or(default.size()))
    }
}

#[derive(Debug, Subcommand)]
pub enum TenantsCommand {
    /// List tenants
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        id: Option<Id>,
        #[arg(long)]
        name: Option<String>,
        /// ACTIVE, INACTIVE, SUSPENDED or all
        #[arg(long, default_value = "all")]
        status: StatusFilter<TenantStatus>,
        /// Walk every page from --page on
        #[arg(long)]
        all: bool,
    },
    /// Show one tenant
    Get { id: Id },
    /// Create a tenant
    Create {
        name: String,
        #[arg(long)]
        status: Option<TenantStatus>,
    },
    /// Set a tenant's status to ACTIVE
    Activate { id: Id },
    /// Set a tenant's status to INACTIVE
    Deactivate { id: Id },
    /// Delete a tenant
    Delete { id: Id },
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List users
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        id: Option<Id>,
        #[arg(long)]
        email: Option<String>,
        /// ACTIVE, INACTIVE, INVITED or all
        #[arg(long, default_value = "all")]
        status: StatusFilter<UserStatus>,
        #[arg(long)]
        tenant_id: Option<Id>,
        /// Division id, or `none` for users without a division
        #[arg(long)]
        division_id: Option<Filter<Id>>,
        /// Department id, or `none` for users without a department
        #[arg(long)]
        department_id: Option<Filter<Id>>,
        #[arg(long)]
        role_level: Option<i32>,
        /// Walk every page from --page on
        #[arg(long)]
        all: bool,
    },
    /// Activate a user
    Activate { id: Id },
    /// Deactivate a user
    Deactivate { id: Id },
}

#[derive(Debug, Subcommand)]
pub enum TenantUsersCommand {
    /// List users of the current tenant
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        email: Option<String>,
        /// ACTIVE, INACTIVE, INVITED or all
        #[arg(long, default_value = "all")]
        status: StatusFilter<UserStatus>,
        #[arg(long)]
        role_level: Option<i32>,
    },
    /// Invite a new user by email
    Invite { email: String },
    /// Replace a user's roles
    AssignRoles {
        id: Id,
        #[arg(required = true)]
        role_ids: Vec<Id>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List roles
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        id: Option<Id>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        level: Option<i32>,
    },
    /// Roles on this page the signed-in user may grant
    Assignable {
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum DivisionsCommand {
    /// List divisions
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        name: Option<String>,
    },
    /// Create a division
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum DepartmentsCommand {
    /// List departments
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        name: Option<String>,
        /// Division id, or `none` for departments without a division
        #[arg(long)]
        division_id: Option<Filter<Id>>,
    },
    /// List members of a department
    Members {
        id: Id,
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TasksCommand {
    /// List tasks
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        project_id: Option<Id>,
        #[arg(long)]
        title: Option<String>,
        /// PENDING, IN_PROGRESS, COMPLETED, CANCELLED or all
        #[arg(long, default_value = "all")]
        status: StatusFilter<TaskStatus>,
        /// LOW, NORMAL or HIGH
        #[arg(long)]
        priority: Option<TaskPriority>,
    },
    /// Step tasks assigned to the signed-in user
    Mine,
    /// Actions the signed-in user performed recently
    Activity,
    /// Perform a workflow action on a task's current step
    Execute {
        task_id: Id,
        action: String,
        #[arg(long)]
        comment: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render response")?;
    println!("{rendered}");
    Ok(())
}

/// Print one page, or every item from that page on
async fn print_listing<T, F, Fut>(start: PageRequest, all: bool, mut fetch: F) -> Result<()>
where
    T: Serialize,
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<PagedResponse<T>, ApiError>>,
{
    if all {
        let items: Vec<T> = pager::items(start, fetch).try_collect().await?;
        print_json(&items)
    } else {
        print_json(&fetch(start).await?)
    }
}

/// Run one command against the backend
///
/// # Errors
/// Returns the first API or rendering failure.
pub async fn run(ctx: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Me => {
            let session = SessionContext::new();
            let user = session.load(&ctx.admin.profile()).await?;
            print_json(&*user)
        }
        Command::Dashboard => print_json(&ctx.admin.dashboard().stats().await?),
        Command::Tenants(cmd) => tenants(ctx, cmd).await,
        Command::Users(cmd) => users(ctx, cmd).await,
        Command::TenantUsers(cmd) => tenant_users(ctx, cmd).await,
        Command::Roles(cmd) => roles(ctx, cmd).await,
        Command::Divisions(cmd) => divisions(ctx, cmd).await,
        Command::Departments(cmd) => departments(ctx, cmd).await,
        Command::Tasks(cmd) => tasks(ctx, cmd).await,
        Command::Logout => {
            SessionContext::new().logout(&ctx.admin.profile()).await?;
            tracing::info!("signed out");
            Ok(())
        }
    }
}

async fn tenants(ctx: &AppContext, cmd: TenantsCommand) -> Result<()> {
    let client = ctx.admin.tenants();
    match cmd {
        TenantsCommand::List {
            page,
            id,
            name,
            status,
            all,
        } => {
            let filters = TenantQuery {
                page: page.request(PageRequest::default())?,
                id,
                name,
                status,
            };
            print_listing(filters.page, all, |page| {
                let client = client.clone();
                let query = TenantQuery {
                    page,
                    ..filters.clone()
                };
                async move { client.list(&query).await }
            })
            .await
        }
        TenantsCommand::Get { id } => print_json(&client.get(id).await?),
        TenantsCommand::Create { name, status } => {
            let mut request = TenantRequest::new(name);
            if let Some(status) = status {
                request = request.with_status(status);
            }
            print_json(&client.create(&request).await?)
        }
        TenantsCommand::Activate { id } => {
            let tenant = client.get(id).await?;
            print_json(&client.activate(&tenant).await?)
        }
        TenantsCommand::Deactivate { id } => {
            let tenant = client.get(id).await?;
            print_json(&client.deactivate(&tenant).await?)
        }
        TenantsCommand::Delete { id } => {
            client.delete(id).await?;
            print_json(&json!({ "deleted": id }))
        }
    }
}

async fn users(ctx: &AppContext, cmd: UsersCommand) -> Result<()> {
    let client = ctx.admin.users();
    match cmd {
        UsersCommand::List {
            page,
            id,
            email,
            status,
            tenant_id,
            division_id,
            department_id,
            role_level,
            all,
        } => {
            let filters = UserQuery {
                page: page.request(PageRequest::default())?,
                id,
                email,
                status,
                tenant_id,
                division_id: division_id.unwrap_or_default(),
                department_id: department_id.unwrap_or_default(),
                role_level,
            };
            print_listing(filters.page, all, |page| {
                let client = client.clone();
                let query = UserQuery {
                    page,
                    ..filters.clone()
                };
                async move { client.list(&query).await }
            })
            .await
        }
        UsersCommand::Activate { id } => print_json(&client.activate(id).await?),
        UsersCommand::Deactivate { id } => print_json(&client.deactivate(id).await?),
    }
}

async fn tenant_users(ctx: &AppContext, cmd: TenantUsersCommand) -> Result<()> {
    let client = ctx.admin.tenant_users();
    match cmd {
        TenantUsersCommand::List {
            page,
            email,
            status,
            role_level,
        } => {
            let query = TenantUserQuery {
                page: page.request(PageRequest::default())?,
                email,
                status,
                role_level,
            };
            print_json(&client.list(&query).await?)
        }
        TenantUsersCommand::Invite { email } => print_json(&client.invite(&email).await?),
        TenantUsersCommand::AssignRoles { id, role_ids } => {
            print_json(&client.assign_roles(id, &role_ids).await?)
        }
    }
}

async fn roles(ctx: &AppContext, cmd: RolesCommand) -> Result<()> {
    let client = ctx.admin.roles();
    match cmd {
        RolesCommand::List {
            page,
            id,
            name,
            level,
        } => {
            let query = RoleQuery {
                page: page.request(PageRequest::default())?,
                id,
                name,
                level,
            };
            print_json(&client.list(&query).await?)
        }
        RolesCommand::Assignable { page } => {
            let session = SessionContext::new();
            session.load(&ctx.admin.profile()).await?;
            let query = RoleQuery {
                page: page.request(PageRequest::default())?,
                ..Default::default()
            };
            let listed = client.list(&query).await?;
            print_json(&session.assignable(&listed.content))
        }
    }
}

async fn divisions(ctx: &AppContext, cmd: DivisionsCommand) -> Result<()> {
    let client = ctx.admin.divisions();
    match cmd {
        DivisionsCommand::List { page, name } => {
            let query = DivisionQuery {
                page: page.request(PageRequest::default())?,
                name,
            };
            print_json(&client.list(&query).await?)
        }
        DivisionsCommand::Create { name, description } => {
            let request = CreateDivisionRequest { name, description };
            print_json(&client.create(&request).await?)
        }
    }
}

async fn departments(ctx: &AppContext, cmd: DepartmentsCommand) -> Result<()> {
    let client = ctx.admin.departments();
    match cmd {
        DepartmentsCommand::List {
            page,
            name,
            division_id,
        } => {
            let query = DepartmentQuery {
                page: page.request(PageRequest::default())?,
                name,
                division_id: division_id.unwrap_or_default(),
            };
            print_json(&client.list(&query).await?)
        }
        DepartmentsCommand::Members { id, page, search } => {
            let query = MemberQuery {
                page: page.request(PageRequest::default())?,
                search,
            };
            print_json(&client.members(id, &query).await?)
        }
    }
}

async fn tasks(ctx: &AppContext, cmd: TasksCommand) -> Result<()> {
    match cmd {
        TasksCommand::List {
            page,
            project_id,
            title,
            status,
            priority,
        } => {
            let query = TaskQuery {
                page: page.request(TaskQuery::default().page)?,
                project_id,
                title,
                status,
                priority,
            };
            print_json(&ctx.workflow.tasks().list(&query).await?)
        }
        TasksCommand::Mine => print_json(&ctx.workflow.step_tasks().my_assigned().await?),
        TasksCommand::Activity => {
            print_json(&ctx.workflow.step_tasks().my_recent_activity().await?)
        }
        TasksCommand::Execute {
            task_id,
            action,
            comment,
        } => {
            let mut request = ExecuteActionRequest::new(action);
            if let Some(comment) = comment {
                request = request.with_comment(comment);
            }
            let task = ctx
                .workflow
                .step_tasks()
                .execute_action(task_id, &request)
                .await?;
            print_json(&task)
        }
    }
}
