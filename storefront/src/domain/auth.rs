//! Sign-in and sign-up inputs.
//!
//! Form parsing stays outside the domain; these constructors validate raw
//! strings before an account service talks to the member port.

use std::fmt;

use zeroize::Zeroizing;

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Domain error returned when account form values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
    /// Password and confirmation differ.
    PasswordMismatch,
    /// Password is shorter than [`MIN_PASSWORD_LEN`].
    PasswordTooShort,
    /// Terms of service were not accepted.
    TermsNotAccepted,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Email must not be empty"),
            Self::EmptyPassword => write!(f, "Password must not be empty"),
            Self::PasswordMismatch => write!(f, "Passwords do not match"),
            Self::PasswordTooShort => write!(
                f,
                "Password must be at least {MIN_PASSWORD_LEN} characters long"
            ),
            Self::TermsNotAccepted => write!(f, "Please agree to the terms and conditions"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Validated sign-in credentials.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use storefront::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" traveller@example.com ", "secret").unwrap();
/// assert_eq!(creds.email(), "traveller@example.com");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        let email = normalise_email(email)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used as the login identifier.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Raw sign-up form values, before validation.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    /// Email address.
    pub email: String,
    /// Chosen password.
    pub password: Zeroizing<String>,
    /// Password confirmation.
    pub confirm: Zeroizing<String>,
    /// Whether the terms (and marketing messages) were accepted.
    pub agreed: bool,
}

/// Validated sign-up request ready for the member port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    credentials: LoginCredentials,
    marketing_agreed: bool,
}

impl SignupRequest {
    /// Validate a sign-up form.
    ///
    /// Checks run in the order the form reports them: matching passwords,
    /// minimum length, then acceptance of the terms.
    pub fn try_from_form(form: &SignupForm) -> Result<Self, CredentialsValidationError> {
        let email = normalise_email(&form.email)?;
        if form.password.as_str() != form.confirm.as_str() {
            return Err(CredentialsValidationError::PasswordMismatch);
        }
        if form.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsValidationError::PasswordTooShort);
        }
        if !form.agreed {
            return Err(CredentialsValidationError::TermsNotAccepted);
        }

        Ok(Self {
            credentials: LoginCredentials {
                email,
                password: form.password.clone(),
            },
            marketing_agreed: form.agreed,
        })
    }

    /// Email to register.
    pub fn email(&self) -> &str {
        self.credentials.email()
    }

    /// Password to register.
    pub fn password(&self) -> &str {
        self.credentials.password()
    }

    /// Marketing consent sent with the registration.
    pub fn marketing_agreed(&self) -> bool {
        self.marketing_agreed
    }
}

fn normalise_email(raw: &str) -> Result<String, CredentialsValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CredentialsValidationError::EmptyEmail);
    }
    Ok(trimmed.to_owned())
}
