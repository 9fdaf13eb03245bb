//! The entity catalogue
//!
//! Every screen of the dashboard is an instance of the same CRUD pattern,
//! parameterized by an [`EntityKind`]: its schema, its endpoints, the lookup
//! lists its form needs, and how a validated record is put on the wire.
//!
//! ## Wire shapes
//!
//! Most entities submit their domain fields as-is. The two event
//! assignment screens are different: the backend keys them by event, so an
//! update re-sends the previous keys as `old*` next to the new `new*` ones,
//! and the selected gateway travels inside an `items` array.

use crate::field::{ChoiceOption, FieldSpec, LookupSource};
use crate::record::{FieldValue, ID_KEY, Record};
use crate::validation::{CrossRule, Schema, ValidRecord};
use aricon_core::{AdminError, AdminResult, AppConfig, FieldKind, Named, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Gateways offered on the payment gateway form
pub const GATEWAYS: [(&str, &str); 6] = [
    ("razorpay", "Razorpay"),
    ("instamojo", "Instamojo"),
    ("cashfree", "Cashfree"),
    ("payu", "PayU"),
    ("paytm", "Paytm"),
    ("phonepe", "PhonePe"),
];

/// Razorpay merchant accounts
pub const RAZORPAY_MMIDS: [(&str, &str); 3] =
    [("mmid1", "MMID 1"), ("mmid2", "MMID 2"), ("mmid3", "MMID 3")];

/// Modules an event admin can be given access to
pub const MODULES: [(&str, &str); 8] = [
    ("faculty", "Faculty"),
    ("team", "Team"),
    ("arrival", "Arrival"),
    ("departure", "Departure"),
    ("hotel", "Hotel"),
    ("session", "Faculty Hall Session"),
    ("presentation", "Preview Room"),
    ("payment", "Payment Gateway"),
];

const RAZORPAY: &str = "razorpay";

fn options(pairs: &[(&str, &str)]) -> Vec<ChoiceOption> {
    pairs
        .iter()
        .map(|(value, label)| ChoiceOption::new(*value, *label))
        .collect()
}

// ============================================================================
// Endpoints
// ============================================================================

/// Resolved resource paths for one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Collection read path
    pub list: String,
    /// Create path; update and delete append `/<id>`
    pub mutation: String,
}

impl Endpoints {
    /// Path addressing one stored record
    pub fn item(&self, id: &RecordId) -> String {
        format!("{}/{}", self.mutation, id)
    }
}

/// Path of a lookup collection
pub fn lookup_path(source: LookupSource, config: &AppConfig) -> String {
    match source {
        LookupSource::Faculty => EntityKind::Faculty.endpoints(config).list,
        LookupSource::Teams => EntityKind::Team.endpoints(config).list,
        LookupSource::Events => config
            .endpoint_override(source.slug())
            .unwrap_or(source.default_path())
            .to_string(),
    }
}

// ============================================================================
// EntityKind
// ============================================================================

/// The entity types managed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Faculty,
    Team,
    Arrival,
    Departure,
    Hotel,
    Session,
    Presentation,
    PaymentGateway,
    EventAssignment,
}

impl EntityKind {
    /// All entities in navigation order
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Faculty,
        EntityKind::Team,
        EntityKind::Arrival,
        EntityKind::Departure,
        EntityKind::Hotel,
        EntityKind::Session,
        EntityKind::Presentation,
        EntityKind::PaymentGateway,
        EntityKind::EventAssignment,
    ];

    /// Key used in configuration and logs
    pub fn slug(&self) -> &'static str {
        match self {
            EntityKind::Faculty => "faculty",
            EntityKind::Team => "team",
            EntityKind::Arrival => "arrival",
            EntityKind::Departure => "departure",
            EntityKind::Hotel => "hotel",
            EntityKind::Session => "session",
            EntityKind::Presentation => "presentation",
            EntityKind::PaymentGateway => "payment_gateway",
            EntityKind::EventAssignment => "event_assignment",
        }
    }

    /// Look up an entity by slug
    pub fn from_slug(slug: &str) -> AdminResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == slug)
            .ok_or_else(|| AdminError::UnknownEntity(slug.to_string()))
    }

    /// Navigation label
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Faculty => "Faculty",
            EntityKind::Team => "Team",
            EntityKind::Arrival => "Arrival",
            EntityKind::Departure => "Departure",
            EntityKind::Hotel => "Hotel",
            EntityKind::Session => "Faculty Hall Session",
            EntityKind::Presentation => "Preview Room",
            EntityKind::PaymentGateway => "Payment Gateway",
            EntityKind::EventAssignment => "Event Assign",
        }
    }

    /// Noun used in notifications and buttons
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Faculty => "Faculty",
            EntityKind::Team => "Team member",
            EntityKind::Arrival => "Arrival",
            EntityKind::Departure => "Departure",
            EntityKind::Hotel => "Hotel",
            EntityKind::Session => "Session",
            EntityKind::Presentation => "Presentation",
            EntityKind::PaymentGateway => "Payment gateway",
            EntityKind::EventAssignment => "Event assignment",
        }
    }

    /// Icon emoji for navigation
    pub fn icon(&self) -> &'static str {
        match self {
            EntityKind::Faculty => "🎓",
            EntityKind::Team => "👥",
            EntityKind::Arrival => "🛬",
            EntityKind::Departure => "🛫",
            EntityKind::Hotel => "🏨",
            EntityKind::Session => "🎤",
            EntityKind::Presentation => "🖥️",
            EntityKind::PaymentGateway => "💳",
            EntityKind::EventAssignment => "🗂️",
        }
    }

    fn default_paths(&self) -> (&'static str, &'static str) {
        match self {
            EntityKind::Faculty => ("/api/faculty", "/api/admin/faculty"),
            EntityKind::Team => ("/api/admin/teams", "/api/admin/teams"),
            EntityKind::Arrival => ("/api/checkin-details", "/api/checkin-details"),
            EntityKind::Departure => ("/api/departure-details", "/api/departure-details"),
            EntityKind::Hotel => ("/api/hotel-details", "/api/hotel-details"),
            EntityKind::Session => ("/api/session-details", "/api/session-details"),
            EntityKind::Presentation => {
                ("/api/presentation-details", "/api/presentation-details")
            }
            EntityKind::PaymentGateway | EntityKind::EventAssignment => {
                ("/api/admin/event-assign", "/api/admin/event-assign")
            }
        }
    }

    /// Resource paths, honoring configuration overrides
    ///
    /// `endpoints.<slug>` replaces both paths; `endpoints.<slug>_list`
    /// replaces only the collection path.
    pub fn endpoints(&self, config: &AppConfig) -> Endpoints {
        let (list, mutation) = self.default_paths();
        let base = config.endpoint_override(self.slug());
        let list_key = format!("{}_list", self.slug());

        Endpoints {
            list: config
                .endpoint_override(&list_key)
                .or(base)
                .unwrap_or(list)
                .to_string(),
            mutation: base.unwrap_or(mutation).to_string(),
        }
    }

    /// Validation schema and field layout
    pub fn schema(&self) -> Schema {
        match self {
            EntityKind::Faculty => Schema::new(self.singular())
                .field(
                    FieldSpec::text("facultyName", "Faculty name")
                        .required()
                        .max_len(50)
                        .placeholder("Enter faculty name"),
                )
                .field(
                    FieldSpec::email("email", "Email")
                        .required()
                        .max_len(50)
                        .placeholder("Enter email"),
                )
                .field(
                    FieldSpec::phone("mobile", "Mobile number", 6, 15)
                        .required()
                        .placeholder("Enter mobile number"),
                ),
            EntityKind::Team => Schema::new(self.singular())
                .field(
                    FieldSpec::text("name", "Name")
                        .required()
                        .max_len(50)
                        .placeholder("Enter name"),
                )
                .field(
                    FieldSpec::email("email", "Email")
                        .required()
                        .max_len(50)
                        .placeholder("Enter email"),
                )
                .field(
                    FieldSpec::phone("mobile", "Mobile number", 10, 10)
                        .required()
                        .placeholder("Enter 10 digit mobile number"),
                ),
            EntityKind::Arrival => travel_schema(self.singular(), "arrival", "Arrival"),
            EntityKind::Departure => travel_schema(self.singular(), "departure", "Departure"),
            EntityKind::Hotel => Schema::new(self.singular())
                .field(faculty_reference())
                .field(
                    FieldSpec::text("hotelName", "Hotel name")
                        .required()
                        .max_len(50)
                        .placeholder("Enter hotel name"),
                )
                .field(FieldSpec::date("checkInDate", "Check-in date").required())
                .field(FieldSpec::date("checkOutDate", "Check-out date").required())
                .rule(CrossRule::not_before(
                    "checkOutDate",
                    "checkInDate",
                    "Check-out date cannot be before check-in date.",
                )),
            EntityKind::Session => slot_schema(self.singular(), "session", "Session"),
            EntityKind::Presentation => {
                slot_schema(self.singular(), "presentation", "Presentation")
            }
            EntityKind::PaymentGateway => Schema::new(self.singular())
                .field(FieldSpec::reference("eventId", "Event", LookupSource::Events).required())
                .field(
                    FieldSpec::choice("gateway", "Payment gateway", options(&GATEWAYS))
                        .required(),
                )
                .field(
                    FieldSpec::choice("mmid", "MMID", options(&RAZORPAY_MMIDS))
                        .help("Only used with Razorpay"),
                )
                .rule(CrossRule::required_when(
                    "mmid",
                    "gateway",
                    RAZORPAY,
                    "Please select an MMID for Razorpay.",
                )),
            EntityKind::EventAssignment => Schema::new(self.singular())
                .field(FieldSpec::reference("eventId", "Event", LookupSource::Events).required())
                .field(
                    FieldSpec::reference("eventAdminId", "Event manager", LookupSource::Teams)
                        .required(),
                )
                .field(
                    FieldSpec::multi_choice("items", "Module", options(&MODULES))
                        .required()
                        .help("Select the module(s) you want to give access to"),
                ),
        }
    }

    /// Lookup lists the form and table need
    pub fn lookups(&self) -> Vec<LookupSource> {
        let mut sources: Vec<LookupSource> = self
            .schema()
            .fields
            .iter()
            .filter_map(|f| f.lookup)
            .collect();
        sources.dedup();
        sources
    }

    /// Whether updates send `old*`/`new*` key pairs
    pub fn is_reassignment(&self) -> bool {
        matches!(self, EntityKind::PaymentGateway | EntityKind::EventAssignment)
    }

    // ========================================================================
    // Wire encoding
    // ========================================================================

    /// Body of a create request; never carries an identifier
    pub fn encode_create(&self, valid: &ValidRecord) -> Value {
        let record = valid.record();
        match self {
            EntityKind::PaymentGateway => json!({
                "eventId": record.text("eventId"),
                "items": [gateway_item(record)],
            }),
            EntityKind::EventAssignment => json!({
                "eventId": record.text("eventId"),
                "eventAdminId": record.text("eventAdminId"),
                "items": record.list("items"),
            }),
            _ => record.to_json(&self.schema().fields),
        }
    }

    /// Body of an update request
    ///
    /// `original` is the row as fetched, used for the `old*` keys of
    /// reassignment entities.
    pub fn encode_update(&self, original: &Record, valid: &ValidRecord) -> Value {
        let record = valid.record();
        match self {
            EntityKind::PaymentGateway => json!({
                "oldEventId": original.text("eventId"),
                "newEventId": record.text("eventId"),
                "items": [gateway_item(record)],
            }),
            EntityKind::EventAssignment => json!({
                "oldEventId": original.text("eventId"),
                "oldEventAdminId": original.text("eventAdminId"),
                "newEventId": record.text("eventId"),
                "newEventAdminId": record.text("eventAdminId"),
                "items": record.list("items"),
            }),
            _ => record.to_json(&self.schema().fields),
        }
    }

    /// Read one row of the collection
    pub fn decode(&self, node: &Value) -> AdminResult<Record> {
        let schema = self.schema();
        let mut record = Record::from_json(&schema.fields, node)?;

        match self {
            EntityKind::PaymentGateway => {
                if record.text("eventId").is_empty()
                    && let Some(ids) = node.get("eventIds")
                {
                    record.set("eventId", FieldValue::from_json(FieldKind::Reference, ids));
                }
                let item = node
                    .get("items")
                    .and_then(Value::as_array)
                    .and_then(|items| items.first())
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let (gateway, mmid) = split_gateway_item(item);
                record.set("gateway", gateway);
                record.set("mmid", mmid);
            }
            EntityKind::EventAssignment => {
                if record.text("eventId").is_empty()
                    && let Some(ids) = node.get("eventIds")
                {
                    record.set("eventId", FieldValue::from_json(FieldKind::Reference, ids));
                }
                if record.text("eventAdminId").is_empty()
                    && let Some(team) = node.get("team")
                {
                    record.set("eventAdminId", FieldValue::from_json(FieldKind::Reference, team));
                }
            }
            _ => {}
        }

        Ok(record)
    }

    /// Read a whole collection payload
    pub fn decode_collection(&self, node: &Value) -> AdminResult<Vec<Record>> {
        let rows = node.as_array().ok_or_else(|| {
            AdminError::validation(format!("{} collection is not a list", self.singular()))
        })?;
        rows.iter().map(|row| self.decode(row)).collect()
    }
}

impl Named for EntityKind {
    fn display_name(&self) -> String {
        self.title().to_string()
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ============================================================================
// Schema helpers
// ============================================================================

fn faculty_reference() -> FieldSpec {
    FieldSpec::reference("facultyName", "Faculty name", LookupSource::Faculty).required()
}

fn travel_schema(entity: &str, prefix: &str, label: &str) -> Schema {
    Schema::new(entity)
        .field(faculty_reference())
        .field(FieldSpec::date(format!("{prefix}Date"), format!("{label} date")).required())
        .field(FieldSpec::time(format!("{prefix}Time"), format!("{label} time")).required())
        .field(
            FieldSpec::text(format!("{prefix}FlightDetail"), "Flight number")
                .required()
                .max_len(20)
                .placeholder("e.g. AI 202"),
        )
}

fn slot_schema(entity: &str, prefix: &str, label: &str) -> Schema {
    let start = format!("{prefix}StartTime");
    let end = format!("{prefix}EndTime");
    Schema::new(entity)
        .field(faculty_reference())
        .field(
            FieldSpec::text(format!("{prefix}TopicName"), format!("{label} topic"))
                .required()
                .max_len(100)
                .placeholder("Enter topic"),
        )
        .field(FieldSpec::date(format!("{prefix}Date"), format!("{label} date")).required())
        .field(FieldSpec::time(start.clone(), format!("{label} start time")).required())
        .field(FieldSpec::time(end.clone(), format!("{label} end time")).required())
        .rule(CrossRule::after(&end, &start, "End time must be after start time."))
}

fn gateway_item(record: &Record) -> String {
    let gateway = record.text("gateway");
    let mmid = record.text("mmid");
    if gateway == RAZORPAY && !mmid.is_empty() {
        format!("{gateway}-{mmid}")
    } else {
        gateway.to_string()
    }
}

fn split_gateway_item(item: &str) -> (String, String) {
    match item.split_once('-') {
        Some((gateway, mmid)) if gateway == RAZORPAY => (gateway.to_string(), mmid.to_string()),
        _ => (item.to_string(), String::new()),
    }
}

/// Identifier of a row object, if present
pub fn row_id(node: &Value) -> Option<RecordId> {
    node.get(ID_KEY)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(RecordId::from)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use aricon_core::Identifiable;
    use pretty_assertions::assert_eq;

    fn arrival() -> Record {
        Record::new()
            .with("facultyName", "f1")
            .with("arrivalDate", "2026-10-19")
            .with("arrivalTime", "14:05")
            .with("arrivalFlightDetail", "AI 202")
    }

    #[test]
    fn test_every_entity_has_a_schema_and_paths() {
        let config = AppConfig::default();
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            assert!(!schema.fields.is_empty(), "{kind} has no fields");
            assert!(schema.fields.iter().all(|f| f.required || f.name == "mmid"));
            let endpoints = kind.endpoints(&config);
            assert!(endpoints.list.starts_with("/api/"));
            assert!(endpoints.mutation.starts_with("/api/"));
            assert_eq!(EntityKind::from_slug(kind.slug()).unwrap(), kind);
        }
    }

    #[test]
    fn test_missing_required_field_is_attributed_for_every_entity() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            for field in schema.fields.iter().filter(|f| f.required) {
                let errors = schema.validate(&schema.blank_record()).unwrap_err();
                assert_eq!(
                    errors.first(&field.name),
                    Some(field.required_message().as_str()),
                    "{kind}.{}",
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert!(matches!(
            EntityKind::from_slug("speakers"),
            Err(AdminError::UnknownEntity(_))
        ));
    }

    #[test]
    fn test_faculty_paths_differ_for_list_and_mutation() {
        let endpoints = EntityKind::Faculty.endpoints(&AppConfig::default());
        assert_eq!(endpoints.list, "/api/faculty");
        assert_eq!(endpoints.mutation, "/api/admin/faculty");
        assert_eq!(endpoints.item(&RecordId::new("f1")), "/api/admin/faculty/f1");
    }

    #[test]
    fn test_endpoint_overrides() {
        let config = AppConfig::default()
            .with_endpoint("presentation", "/api/checkin-details")
            .with_endpoint("faculty_list", "/api/v2/faculty")
            .with_endpoint("events", "/api/v2/events");

        let presentation = EntityKind::Presentation.endpoints(&config);
        assert_eq!(presentation.list, "/api/checkin-details");
        assert_eq!(presentation.mutation, "/api/checkin-details");

        let faculty = EntityKind::Faculty.endpoints(&config);
        assert_eq!(faculty.list, "/api/v2/faculty");
        assert_eq!(faculty.mutation, "/api/admin/faculty");

        assert_eq!(lookup_path(LookupSource::Faculty, &config), "/api/v2/faculty");
        assert_eq!(lookup_path(LookupSource::Events, &config), "/api/v2/events");
        assert_eq!(
            lookup_path(LookupSource::Teams, &AppConfig::default()),
            "/api/admin/teams"
        );
    }

    #[test]
    fn test_faculty_mobile_bounds() {
        let schema = EntityKind::Faculty.schema();
        let base = Record::new()
            .with("facultyName", "Dr. Rao")
            .with("email", "rao@example.org");

        assert!(schema.validate(&base.clone().with("mobile", "123456")).is_ok());
        assert!(schema.validate(&base.clone().with("mobile", "123456789012345")).is_ok());
        assert!(schema.validate(&base.clone().with("mobile", "12345")).is_err());
        assert!(schema.validate(&base.clone().with("mobile", "1234567890123456")).is_err());
        assert!(schema.validate(&base.with("mobile", "98765-4321")).is_err());
    }

    #[test]
    fn test_team_mobile_is_exactly_ten_digits() {
        let schema = EntityKind::Team.schema();
        let base = Record::new().with("name", "Asha").with("email", "asha@example.org");

        assert!(schema.validate(&base.clone().with("mobile", "9876543210")).is_ok());
        let errors = schema
            .validate(&base.with("mobile", "987654321"))
            .unwrap_err();
        assert_eq!(errors.first("mobile"), Some("Mobile number must be 10 digits."));
    }

    #[test]
    fn test_flight_number_ceiling() {
        let schema = EntityKind::Arrival.schema();
        let errors = schema
            .validate(&arrival().with("arrivalFlightDetail", "X".repeat(21)))
            .unwrap_err();
        assert_eq!(
            errors.first("arrivalFlightDetail"),
            Some("Flight number cannot exceed 20 characters.")
        );
    }

    #[test]
    fn test_time_and_date_fields_across_entities() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            for field in &schema.fields {
                let mut record = schema.blank_record();
                match field.kind {
                    FieldKind::Time => {
                        for bad in ["24:00", "9:30", "13:60"] {
                            record.set(field.name.clone(), bad);
                            let errors = schema.validate(&record).unwrap_err();
                            assert_eq!(
                                errors.first(&field.name),
                                Some("Time must be in HH:MM format.")
                            );
                        }
                        for good in ["00:00", "23:59"] {
                            record.set(field.name.clone(), good);
                            let errors = schema.validate(&record).unwrap_err();
                            assert!(!errors.has(&field.name), "{good} rejected");
                        }
                    }
                    FieldKind::Date => {
                        record.set(field.name.clone(), "not-a-date");
                        let errors = schema.validate(&record).unwrap_err();
                        assert_eq!(errors.first(&field.name), Some("Invalid date format."));

                        record.set(field.name.clone(), "2026-10-19");
                        let errors = schema.validate(&record).unwrap_err();
                        assert!(!errors.has(&field.name));
                    }
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_hotel_checkout_not_before_checkin() {
        let schema = EntityKind::Hotel.schema();
        let record = Record::new()
            .with("facultyName", "f1")
            .with("hotelName", "Taj")
            .with("checkInDate", "2026-10-20")
            .with("checkOutDate", "2026-10-19");

        let errors = schema.validate(&record).unwrap_err();
        assert_eq!(
            errors.first("checkOutDate"),
            Some("Check-out date cannot be before check-in date.")
        );
        assert!(schema.validate(&record.with("checkOutDate", "2026-10-20")).is_ok());
    }

    #[test]
    fn test_create_body_has_no_identifier() {
        let schema = EntityKind::Arrival.schema();
        let valid = schema.validate(&arrival().with_id("a1")).unwrap();
        let body = EntityKind::Arrival.encode_create(&valid);

        assert!(body.get("_id").is_none());
        assert_eq!(
            body,
            json!({
                "facultyName": "f1",
                "arrivalDate": "2026-10-19",
                "arrivalTime": "14:05",
                "arrivalFlightDetail": "AI 202"
            })
        );
    }

    #[test]
    fn test_payment_gateway_encoding() {
        let kind = EntityKind::PaymentGateway;
        let schema = kind.schema();
        let draft = Record::new()
            .with("eventId", "e2")
            .with("gateway", "razorpay")
            .with("mmid", "mmid2");
        let valid = schema.validate(&draft).unwrap();

        assert_eq!(
            kind.encode_create(&valid),
            json!({ "eventId": "e2", "items": ["razorpay-mmid2"] })
        );

        let original = Record::new().with_id("pg1").with("eventId", "e1");
        assert_eq!(
            kind.encode_update(&original, &valid),
            json!({ "oldEventId": "e1", "newEventId": "e2", "items": ["razorpay-mmid2"] })
        );

        let plain = schema
            .validate(
                &Record::new()
                    .with("eventId", "e2")
                    .with("gateway", "payu")
                    .with("mmid", "mmid1"),
            )
            .unwrap();
        assert_eq!(
            kind.encode_create(&plain),
            json!({ "eventId": "e2", "items": ["payu"] })
        );
    }

    #[test]
    fn test_payment_gateway_decoding() {
        let record = EntityKind::PaymentGateway
            .decode(&json!({
                "_id": "pg1",
                "eventIds": [{ "_id": "e1", "eventName": "ARICON 2026" }],
                "items": ["razorpay-mmid3"]
            }))
            .unwrap();

        assert_eq!(record.record_id(), Some(&RecordId::new("pg1")));
        assert_eq!(record.text("eventId"), "e1");
        assert_eq!(record.text("gateway"), "razorpay");
        assert_eq!(record.text("mmid"), "mmid3");
    }

    #[test]
    fn test_event_assignment_round_trip_keys() {
        let kind = EntityKind::EventAssignment;
        let original = kind
            .decode(&json!({
                "_id": "as1",
                "eventId": "e1",
                "team": { "_id": "t1", "name": "Asha" },
                "items": ["hotel", "arrival"]
            }))
            .unwrap();
        assert_eq!(original.text("eventAdminId"), "t1");

        let mut draft = original.clone();
        draft.set("eventAdminId", "t2");
        let valid = kind.schema().validate(&draft).unwrap();

        assert_eq!(
            kind.encode_update(&original, &valid),
            json!({
                "oldEventId": "e1",
                "oldEventAdminId": "t1",
                "newEventId": "e1",
                "newEventAdminId": "t2",
                "items": ["hotel", "arrival"]
            })
        );
        assert_eq!(
            kind.encode_create(&valid),
            json!({ "eventId": "e1", "eventAdminId": "t2", "items": ["hotel", "arrival"] })
        );
    }

    #[test]
    fn test_decode_collection() {
        let rows = EntityKind::Hotel
            .decode_collection(&json!([
                { "_id": "h1", "facultyName": "f1", "hotelName": "Taj",
                  "checkInDate": "2026-10-19", "checkOutDate": "2026-10-21" },
                { "_id": "h2", "facultyName": "f2", "hotelName": "Oberoi",
                  "checkInDate": "2026-10-18", "checkOutDate": "2026-10-20" }
            ]))
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text("hotelName"), "Oberoi");

        assert!(EntityKind::Hotel.decode_collection(&json!({})).is_err());
    }

    #[test]
    fn test_lookups_per_entity() {
        assert!(EntityKind::Faculty.lookups().is_empty());
        assert_eq!(EntityKind::Arrival.lookups(), vec![LookupSource::Faculty]);
        assert_eq!(
            EntityKind::EventAssignment.lookups(),
            vec![LookupSource::Events, LookupSource::Teams]
        );
        assert!(EntityKind::EventAssignment.is_reassignment());
        assert!(!EntityKind::Hotel.is_reassignment());
    }

    #[test]
    fn test_row_id() {
        assert_eq!(row_id(&json!({"_id": "x"})), Some(RecordId::new("x")));
        assert_eq!(row_id(&json!({"_id": ""})), None);
    }
}
