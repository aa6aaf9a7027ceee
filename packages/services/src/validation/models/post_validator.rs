use crate::validation::{
    active_model_validator::{ActiveModelValidator, ValidationError},
    field_validators::FieldValidator,
    models::collect,
};
use models::posts;
use sea_orm::ActiveValue;

impl ActiveModelValidator for posts::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error: Option<ValidationError> = None;

        if let ActiveValue::Set(ref title) = self.title {
            collect(&mut error, FieldValidator::required(title, "title"));
            collect(&mut error, FieldValidator::max_length(title, 250, "title"));
        }

        if let ActiveValue::Set(ref slug) = self.slug {
            collect(&mut error, FieldValidator::required(slug, "slug"));
            collect(&mut error, FieldValidator::max_length(slug, 250, "slug"));
            collect(&mut error, FieldValidator::slug(slug, "slug"));
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
