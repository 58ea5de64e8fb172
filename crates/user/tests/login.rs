use nutriplan_shared::Error;
use nutriplan_user::LoginInput;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_login() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_user(&state, "john").await?;
    let cmd = nutriplan_user::Command(state);

    let user = cmd
        .login(LoginInput {
            email: " JOHN@nutriplan.localhost".to_owned(),
            password: "my_password".to_owned(),
        })
        .await?;

    assert_eq!(user.id, id);

    Ok(())
}

#[tokio::test]
async fn test_login_wrong_password() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    helpers::create_user(&state, "john").await?;
    let cmd = nutriplan_user::Command(state);

    let err = cmd
        .login(LoginInput {
            email: "john@nutriplan.localhost".to_owned(),
            password: "not_my_password".to_owned(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unauthorized(_)));
    assert_eq!(err.to_string(), "Invalid email or password.");

    let err = cmd
        .login(LoginInput {
            email: "jane@nutriplan.localhost".to_owned(),
            password: "my_password".to_owned(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unauthorized(_)));

    Ok(())
}

#[tokio::test]
async fn test_login_requires_credentials() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = nutriplan_user::Command(state);

    let err = cmd.login(LoginInput::default()).await.unwrap_err();

    assert!(matches!(err, Error::Validate(_)));

    Ok(())
}
