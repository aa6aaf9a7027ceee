use crate::validation::{
    active_model_validator::{ActiveModelValidator, ValidationError},
    field_validators::FieldValidator,
    models::collect,
};
use models::comments;
use sea_orm::ActiveValue;

impl ActiveModelValidator for comments::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error: Option<ValidationError> = None;

        if let ActiveValue::Set(ref name) = self.name {
            collect(&mut error, FieldValidator::required(name, "name"));
            collect(&mut error, FieldValidator::max_length(name, 80, "name"));
        }

        if let ActiveValue::Set(ref email) = self.email {
            collect(&mut error, FieldValidator::email(email, "email"));
            collect(&mut error, FieldValidator::max_length(email, 254, "email"));
        }

        if let ActiveValue::Set(ref body) = self.body {
            collect(&mut error, FieldValidator::required(body, "body"));
        }

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
