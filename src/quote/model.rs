use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    FullTruckload,
    LessThanTruckload,
    Refrigerated,
    Hazmat,
    Expedited,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::FullTruckload,
        ServiceType::LessThanTruckload,
        ServiceType::Refrigerated,
        ServiceType::Hazmat,
        ServiceType::Expedited,
    ];

    /// The `<option value>` used by the form.
    pub fn value(self) -> &'static str {
        match self {
            ServiceType::FullTruckload => "full-truckload",
            ServiceType::LessThanTruckload => "less-than-truckload",
            ServiceType::Refrigerated => "refrigerated",
            ServiceType::Hazmat => "hazmat",
            ServiceType::Expedited => "expedited",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::FullTruckload => "Full Truckload",
            ServiceType::LessThanTruckload => "Less Than Truckload",
            ServiceType::Refrigerated => "Refrigerated Freight",
            ServiceType::Hazmat => "Hazmat Freight",
            ServiceType::Expedited => "Expedited Shipping",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.value() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("We couldn't send your request: {0}")]
    Submission(String),
    #[error("Your request is already being submitted")]
    InFlight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    FullName,
    Company,
    Email,
    Phone,
    Origin,
    Destination,
    Details,
}

/// What the user has typed so far. Every field may still be blank.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteDraft {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub service_type: Option<ServiceType>,
    pub origin: String,
    pub destination: String,
    pub pickup_date: Option<NaiveDate>,
    pub details: String,
}

impl QuoteDraft {
    pub fn with_text(&self, field: DraftField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            DraftField::FullName => next.full_name = value,
            DraftField::Company => next.company = value,
            DraftField::Email => next.email = value,
            DraftField::Phone => next.phone = value,
            DraftField::Origin => next.origin = value,
            DraftField::Destination => next.destination = value,
            DraftField::Details => next.details = value,
        }
        next
    }

    pub fn with_service(&self, value: &str) -> Self {
        Self {
            service_type: ServiceType::from_value(value),
            ..self.clone()
        }
    }

    /// Accepts the `yyyy-mm-dd` value of a date input. Anything unparsable
    /// clears the date, which is optional.
    pub fn with_pickup_date(&self, value: &str) -> Self {
        Self {
            pickup_date: NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
            ..self.clone()
        }
    }

    /// Checks that every required field is present. No format checks are made.
    pub fn to_request(&self) -> Result<QuoteRequest, QuoteError> {
        let full_name = required(&self.full_name, "Full name")?;
        let company = required(&self.company, "Company name")?;
        let email = required(&self.email, "Email")?;
        let phone = required(&self.phone, "Phone number")?;
        let service_type = self
            .service_type
            .ok_or(QuoteError::MissingField("Service type"))?;
        let origin = required(&self.origin, "Origin location")?;
        let destination = required(&self.destination, "Destination")?;
        let details = Some(self.details.trim())
            .filter(|details| !details.is_empty())
            .map(str::to_string);

        Ok(QuoteRequest {
            full_name,
            company,
            email,
            phone,
            service_type,
            origin,
            destination,
            pickup_date: self.pickup_date,
            details,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, QuoteError> {
    let value = value.trim();
    if value.is_empty() {
        Err(QuoteError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub service_type: ServiceType,
    pub origin: String,
    pub destination: String,
    pub pickup_date: Option<NaiveDate>,
    pub details: Option<String>,
}

/// Acknowledgement for an accepted quote request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteReceipt {
    pub service_type: ServiceType,
    pub origin: String,
    pub destination: String,
    pub pickup_date: Option<NaiveDate>,
}

impl QuoteReceipt {
    pub fn for_request(request: &QuoteRequest) -> Self {
        Self {
            service_type: request.service_type,
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            pickup_date: request.pickup_date,
        }
    }

    pub fn summary(&self) -> String {
        let route = format!(
            "{}: {} to {}",
            self.service_type.label(),
            self.origin,
            self.destination
        );
        match self.pickup_date {
            Some(date) => format!("{}, pickup {}", route, date.format("%B %-d, %Y")),
            None => route,
        }
    }
}
