//! Typed builder for `User`.

use crate::auth::password::PasswordHash;
use crate::identity::email::EmailAddress;
use crate::identity::user::User;
use crate::identity::username::Username;

/// Marker type for missing value.
#[derive(Debug)]
pub struct Missing;

/// Marker type for present value.
#[derive(Debug)]
pub struct Present<T>(pub T);

/// A builder to track presence of `Name` and `Email`.
///
/// Both fields are required; `build` only exists once both have been
/// provided, so an incomplete `User` cannot be constructed.
#[derive(Debug)]
pub struct UserBuilder<Name, Email> {
    username: Name,
    email: Email,
    password: Option<PasswordHash>,
}

impl UserBuilder<Missing, Missing> {
    /// Creates a new [`UserBuilder`] with all required fields
    /// initialized as [`Missing`].
    pub fn new() -> Self {
        Self {
            username: Missing,
            email: Missing,
            password: None,
        }
    }
}

impl Default for UserBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Email> UserBuilder<Missing, Email> {
    /// Sets the username using the [`Username`] value object.
    pub fn username(
        self,
        username: Username,
    ) -> UserBuilder<Present<Username>, Email> {
        UserBuilder {
            username: Present(username),
            email: self.email,
            password: self.password,
        }
    }
}

impl<Name> UserBuilder<Name, Missing> {
    /// Sets the email using the [`EmailAddress`] value object.
    pub fn email(
        self,
        email: EmailAddress,
    ) -> UserBuilder<Name, Present<EmailAddress>> {
        UserBuilder {
            username: self.username,
            email: Present(email),
            password: self.password,
        }
    }
}

impl<Name, Email> UserBuilder<Name, Email> {
    /// Sets an already hashed password.
    pub fn password(mut self, password: PasswordHash) -> Self {
        self.password = Some(password);
        self
    }
}

impl UserBuilder<Present<Username>, Present<EmailAddress>> {
    /// Finalizes the build once both required fields are present.
    pub fn build(self) -> User {
        let UserBuilder {
            username: Present(username),
            email: Present(email),
            password,
        } = self;

        User {
            username,
            email,
            password,
            act_code: None,
            del_code: None,
            pwd_code: None,
            registered_at: None,
            active: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_user_has_no_password() {
        let user = User::builder()
            .username(Username::parse("myuser").unwrap())
            .email(EmailAddress::parse("valid@email.com").unwrap())
            .build();

        assert!(user.password.is_none());
        assert!(user.act_code.is_none());
        assert!(user.registered_at.is_none());
        assert!(!user.active);
    }

    #[test]
    fn password_can_be_set_before_build() {
        let phc = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$wWKIMhR9lyDFvRz9YTZweHKfbftvj+qf+YFY4NeBbtA";
        let user = User::builder()
            .username(Username::parse("myuser").unwrap())
            .email(EmailAddress::parse("valid@email.com").unwrap())
            .password(PasswordHash::parse(phc).unwrap())
            .build();

        assert!(user.password.is_some());
    }
}
