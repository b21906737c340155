use crate::{
    api::RegisterRequest,
    utils::validation::{self, FieldError},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterFormState {
    pub fn validate(&self) -> Vec<FieldError> {
        validation::collect([
            validation::required("firstName", &self.first_name),
            validation::length_between("firstName", self.first_name.trim(), 3, 20),
            validation::required("lastName", &self.last_name),
            validation::length_between("lastName", self.last_name.trim(), 3, 20),
            validation::required("email", &self.email),
            validation::email("email", self.email.trim()),
            validation::max_length("email", self.email.trim(), 50),
            validation::required("password", &self.password),
            validation::length_between("password", &self.password, 3, 40),
        ])
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            password: self.password.clone(),
        }
    }
}
