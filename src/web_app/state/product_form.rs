// web_app/state/product_form.rs - Create/edit product form
//
// The form is in edit mode exactly when it was built from an existing
// record. Submission is split in two so the page can run the request on the
// browser executor between the halves:
//   begin_submit  -> validated draft (or nothing, without any request)
//   send_draft    -> one create or update request
//   finish_submit -> success/failure status, and whether to redirect

use std::str::FromStr;

use rust_decimal::Decimal;
use url::Url;

use crate::web_app::api::ProductApi;
use crate::web_app::error::{Field, StoreResult, ValidationError};
use crate::web_app::model::{Product, ProductDraft, ProductId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

impl FormMode {
    /// Edit when a record is supplied, create otherwise
    pub fn for_record(record: Option<&Product>) -> Self {
        match record {
            Some(product) => FormMode::Edit(product.id),
            None => FormMode::Create,
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn heading(self) -> &'static str {
        match self {
            FormMode::Create => "Add New Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Update Product",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            FormMode::Create => "Adding...",
            FormMode::Edit(_) => "Updating...",
        }
    }

    pub fn success_message(self, title: &str) -> String {
        let verb = match self {
            FormMode::Create => "added",
            FormMode::Edit(_) => "updated",
        };
        format!("{} {} successfully!", title, verb)
    }

    pub fn failure_message(self, reason: &str) -> String {
        let verb = match self {
            FormMode::Create => "adding",
            FormMode::Edit(_) => "updating",
        };
        format!("Error {} product: {}", verb, reason)
    }
}

/// Raw text of the four required inputs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFields {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
    // Carried over from the edited record so updates send the full record
    category: Option<String>,
}

impl ProductFields {
    /// Pre-populate from an existing record
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: Some(product.category.clone()).filter(|c| !c.is_empty()),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Price => &self.price,
            Field::Description => &self.description,
            Field::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Price => self.price = value,
            Field::Description => self.description = value,
            Field::Image => self.image = value,
        }
    }

    /// Validate a single field
    pub fn check(&self, field: Field) -> Result<(), ValidationError> {
        let value = self.get(field).trim();
        if value.is_empty() {
            return Err(ValidationError::Missing(field));
        }
        match field {
            Field::Price => parse_price(value).map(|_| ()),
            Field::Image => Url::parse(value)
                .map(|_| ())
                .map_err(|_| ValidationError::InvalidImageUrl),
            Field::Title | Field::Description => Ok(()),
        }
    }

    /// Every field that currently fails validation
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.check(*field).is_err())
            .collect()
    }

    /// Build the request payload, coercing price to a decimal
    pub fn validate(&self) -> Result<ProductDraft, ValidationError> {
        for field in Field::ALL {
            self.check(field)?;
        }

        Ok(ProductDraft {
            title: self.title.trim().to_string(),
            price: parse_price(self.price.trim())?,
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            category: self.category.clone(),
        })
    }
}

fn parse_price(text: &str) -> Result<Decimal, ValidationError> {
    let price = Decimal::from_str(text).map_err(|_| ValidationError::InvalidPrice)?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(price)
}

/// Outcome shown above the form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A request is outstanding; the submit control is disabled
    Busy,
    Saved(String),
    Failed(String),
}

impl SubmitStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitStatus::Busy)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    mode: FormMode,
    pub fields: ProductFields,
    status: SubmitStatus,
    // Set by a submit attempt; drives invalid-field highlighting
    attempted: bool,
}

impl ProductForm {
    pub fn new(record: Option<&Product>) -> Self {
        Self {
            mode: FormMode::for_record(record),
            fields: record.map(ProductFields::from_product).unwrap_or_default(),
            status: SubmitStatus::Idle,
            attempted: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Fields to highlight after a rejected submit
    pub fn highlighted(&self) -> Vec<Field> {
        if self.attempted {
            self.fields.invalid_fields()
        } else {
            Vec::new()
        }
    }

    /// Validation error to show next to `field` after a rejected submit
    pub fn field_error(&self, field: Field) -> Option<ValidationError> {
        if self.attempted {
            self.fields.check(field).err()
        } else {
            None
        }
    }

    /// Start a submission
    ///
    /// Returns the draft to send, or `None` when a request is already
    /// outstanding or a field is invalid. Invalid input leaves the status
    /// untouched and no request must be issued.
    pub fn begin_submit(&mut self) -> Option<ProductDraft> {
        if self.status.is_busy() {
            return None;
        }
        self.attempted = true;

        match self.fields.validate() {
            Ok(draft) => {
                self.status = SubmitStatus::Busy;
                Some(draft)
            }
            Err(e) => {
                tracing::debug!("Submit blocked: {}", e);
                None
            }
        }
    }

    /// Record the request outcome; returns true when the page should
    /// schedule the redirect back to the listing
    pub fn finish_submit(&mut self, result: StoreResult<Product>) -> bool {
        match result {
            Ok(saved) => {
                self.status = SubmitStatus::Saved(self.mode.success_message(&saved.title));
                true
            }
            Err(e) => {
                let message = self.mode.failure_message(&e.to_string());
                tracing::error!("{}", message);
                self.status = SubmitStatus::Failed(message);
                self.attempted = false;
                false
            }
        }
    }
}

/// Consume the record handed over by the detail view
///
/// The slot is emptied on every call, so a hint serves exactly one visit to
/// the edit page. A mismatched hint is discarded and the page fetches by id.
pub fn take_hint(id: ProductId, slot: &mut Option<Product>) -> Option<Product> {
    slot.take().filter(|product| product.id == id)
}

/// Issue exactly one create (create mode) or update (edit mode) request
pub async fn send_draft<A: ProductApi>(
    api: &A,
    mode: FormMode,
    draft: &ProductDraft,
) -> StoreResult<Product> {
    match mode {
        FormMode::Create => api.create_product(draft).await,
        FormMode::Edit(id) => api.update_product(id, draft).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::products::sample_product;
    use crate::web_app::error::StoreError;

    fn filled() -> ProductFields {
        let mut fields = ProductFields::default();
        fields.set(Field::Title, "Phone".to_string());
        fields.set(Field::Price, "199.99".to_string());
        fields.set(Field::Description, "smart device".to_string());
        fields.set(Field::Image, "https://example.com/phone.jpg".to_string());
        fields
    }

    #[test]
    fn test_mode_follows_record() {
        assert_eq!(FormMode::for_record(None), FormMode::Create);
        assert_eq!(FormMode::for_record(Some(&sample_product(5))), FormMode::Edit(5));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(FormMode::Create.heading(), "Add New Product");
        assert_eq!(FormMode::Edit(1).heading(), "Edit Product");
        assert_eq!(FormMode::Create.submit_label(), "Add Product");
        assert_eq!(FormMode::Edit(1).submit_label(), "Update Product");
        assert_eq!(FormMode::Create.busy_label(), "Adding...");
        assert_eq!(FormMode::Edit(1).busy_label(), "Updating...");
    }

    #[test]
    fn test_messages() {
        assert_eq!(FormMode::Create.success_message("Phone"), "Phone added successfully!");
        assert_eq!(FormMode::Edit(2).success_message("Cable"), "Cable updated successfully!");
        assert_eq!(
            FormMode::Create.failure_message("timed out"),
            "Error adding product: timed out"
        );
        assert_eq!(
            FormMode::Edit(2).failure_message("status 500"),
            "Error updating product: status 500"
        );
    }

    #[test]
    fn test_from_product_prepopulates() {
        let product = sample_product(3);
        let fields = ProductFields::from_product(&product);
        assert_eq!(fields.title, product.title);
        assert_eq!(fields.price, product.price.to_string());
        assert_eq!(fields.description, product.description);
        assert_eq!(fields.image, product.image);
    }

    #[test]
    fn test_validate_coerces_price() {
        let draft = filled().validate().unwrap();
        assert_eq!(draft.price, Decimal::new(19999, 2));
        assert_eq!(draft.title, "Phone");
        assert_eq!(draft.category, None);
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        for field in Field::ALL {
            let mut fields = filled();
            fields.set(field, "   ".to_string());
            assert_eq!(fields.validate(), Err(ValidationError::Missing(field)));
            assert_eq!(fields.invalid_fields(), vec![field]);
        }
    }

    #[test]
    fn test_validate_rejects_bad_price() {
        let mut fields = filled();
        fields.set(Field::Price, "twelve".to_string());
        assert_eq!(fields.validate(), Err(ValidationError::InvalidPrice));

        fields.set(Field::Price, "-1".to_string());
        assert_eq!(fields.validate(), Err(ValidationError::InvalidPrice));

        fields.set(Field::Price, "0".to_string());
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_image() {
        let mut fields = filled();
        fields.set(Field::Image, "images/phone.jpg".to_string());
        assert_eq!(fields.validate(), Err(ValidationError::InvalidImageUrl));
    }

    #[test]
    fn test_edit_draft_keeps_category() {
        let product = sample_product(3);
        let draft = ProductFields::from_product(&product).validate().unwrap();
        assert_eq!(draft.category.as_deref(), Some("electronics"));
    }

    #[test]
    fn test_hint_must_match_id() {
        let mut slot = Some(sample_product(3));
        assert_eq!(take_hint(4, &mut slot), None);
        assert_eq!(slot, None);
        assert_eq!(take_hint(4, &mut None), None);
    }

    #[test]
    fn test_hint_serves_one_visit() {
        let mut slot = Some(sample_product(3));
        assert_eq!(take_hint(3, &mut slot), Some(sample_product(3)));

        // Coming back to the same edit page later fetches the record again
        assert_eq!(take_hint(3, &mut slot), None);
    }

    #[test]
    fn test_begin_submit_invalid_keeps_idle() {
        let mut form = ProductForm::new(None);
        assert!(form.highlighted().is_empty());

        assert_eq!(form.field_error(Field::Title), None);

        assert!(form.begin_submit().is_none());
        assert_eq!(form.status(), &SubmitStatus::Idle);
        assert_eq!(form.highlighted(), Field::ALL.to_vec());
        assert_eq!(form.field_error(Field::Title), Some(ValidationError::Missing(Field::Title)));
    }

    #[test]
    fn test_begin_submit_blocks_while_busy() {
        let mut form = ProductForm::new(None);
        form.fields = filled();

        assert!(form.begin_submit().is_some());
        assert!(form.status().is_busy());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_finish_submit_success() {
        let mut form = ProductForm::new(None);
        form.fields = filled();
        form.begin_submit();

        let mut saved = sample_product(21);
        saved.title = "Phone".to_string();
        assert!(form.finish_submit(Ok(saved)));
        assert_eq!(
            form.status(),
            &SubmitStatus::Saved("Phone added successfully!".to_string())
        );
    }

    #[test]
    fn test_finish_submit_failure_allows_retry() {
        let product = sample_product(4);
        let mut form = ProductForm::new(Some(&product));
        form.begin_submit();

        let redirect = form.finish_submit(Err(StoreError::Status { operation: "update product", status: 500 }));
        assert!(!redirect);
        assert_eq!(
            form.status(),
            &SubmitStatus::Failed(
                "Error updating product: update product failed with status 500".to_string()
            )
        );
        assert!(form.begin_submit().is_some());
    }
}
