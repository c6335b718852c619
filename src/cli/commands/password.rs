use crate::auth::hash_password;

pub fn handle(password: &str) -> anyhow::Result<()> {
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    println!("{}", hash_password(password));
    Ok(())
}
