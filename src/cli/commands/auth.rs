use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::core::auth::AuthLogic;
use crate::errors::AppResult;
use crate::forms::{LoginForm, SignupForm};
use crate::guard::landing_route;
use crate::ui::messages::{error, info, success};
use crate::utils::date::display_date;

pub async fn login(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let form = LoginForm {
            email: email.clone(),
            password: password.clone(),
        };

        let api = ctx.api()?;
        match AuthLogic::login(&api, &mut ctx.pool, &form).await {
            Ok(session) => {
                success("Login successful!");
                info(format!("Opening {}", landing_route(&session)));
                ctx.session = Some(session);
            }
            Err(e) => {
                error("There was an error logging in!");
                return Err(e);
            }
        }
    }
    Ok(())
}

pub async fn signup(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Signup {
        name,
        last_name,
        email,
        password,
        confirm_password,
    } = cmd
    {
        let form = SignupForm {
            name: name.clone(),
            last_name: last_name.clone(),
            email: email.clone(),
            password: password.clone(),
            confirm_password: confirm_password.clone(),
        };

        let api = ctx.api()?;
        match AuthLogic::signup(&api, &form).await {
            Ok(()) => {
                success("Account created!");
                info("You can now log in with `rsurvey login`.");
            }
            Err(e) => {
                error("There was an error creating the account!");
                return Err(e);
            }
        }
    }
    Ok(())
}

pub fn logout(ctx: &mut AppContext) -> AppResult<()> {
    if AuthLogic::logout(&mut ctx.pool)? {
        success("Logged out.");
    } else {
        info("No active session.");
    }
    ctx.session = None;
    Ok(())
}

pub async fn whoami(ctx: &mut AppContext) -> AppResult<()> {
    let api = ctx.api()?;
    let detail = AuthLogic::whoami(&api, ctx.session.as_ref()).await?;

    println!("{} (id {})", detail.user.display_name(), detail.user.id);
    if let Some(s) = &ctx.session {
        println!("Role: {}", if s.is_admin { "administrator" } else { "attendant" });
    }

    if detail.services.is_empty() {
        println!("No tickets attended yet.");
    } else {
        println!("Tickets attended: {}", detail.services.len());
        for t in &detail.services {
            let rated = if t.rating.is_some() { "rated" } else { "not rated" };
            println!(
                "  #{:<6} {}  {} / {}  [{}]",
                t.id,
                display_date(t.created_date()),
                t.kind,
                t.register,
                rated
            );
        }
    }
    Ok(())
}
