use nutriplan_shared::Error;
use nutriplan_user::UpdateProfileInput;
use temp_dir::TempDir;

mod helpers;

fn profile_input() -> UpdateProfileInput {
    UpdateProfileInput {
        name: "John Doe".to_owned(),
        calorie_goal: Some(1800),
        phone: "555-0199".to_owned(),
        address: "2 Side Street".to_owned(),
        id_number: "ID-0002".to_owned(),
    }
}

#[tokio::test]
async fn test_update_profile() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_user(&state, "john").await?;
    let cmd = nutriplan_user::Command(state.clone());

    let user = cmd.update_profile(&id, profile_input()).await?;

    assert_eq!(user.name, "John Doe");
    assert_eq!(user.calorie_goal, 1800);
    assert_eq!(user.address, "2 Side Street");
    assert_eq!(user.email, "john@nutriplan.localhost");
    assert!(user.updated_at.is_some());

    let user = nutriplan_user::Query(state)
        .find(&id)
        .await?
        .expect("user exists");
    assert_eq!(user.phone, "555-0199");

    Ok(())
}

#[tokio::test]
async fn test_update_profile_requires_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_user(&state, "john").await?;
    let cmd = nutriplan_user::Command(state);

    let err = cmd
        .update_profile(
            &id,
            UpdateProfileInput {
                calorie_goal: None,
                ..profile_input()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validate(_)));

    let err = cmd
        .update_profile("01JUNKNOWN", profile_input())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_update_pantry() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let id = helpers::create_user(&state, "john").await?;
    let cmd = nutriplan_user::Command(state.clone());

    let user = cmd
        .update_pantry(
            &id,
            vec![
                "tomato".to_owned(),
                " Garlic ".to_owned(),
                "Tomato".to_owned(),
                "".to_owned(),
            ],
        )
        .await?;

    assert_eq!(user.pantry, vec!["Garlic", "tomato"]);

    let user = nutriplan_user::Query(state)
        .find_by_email("JOHN@nutriplan.localhost")
        .await?
        .expect("user exists");
    assert_eq!(user.pantry, vec!["Garlic", "tomato"]);

    Ok(())
}
