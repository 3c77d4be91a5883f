use serde::{Deserialize, Serialize, Serializer};
use utoipa::{
    openapi::{schema::ObjectBuilder, Ref, RefOr, Schema, Type},
    IntoParams, PartialSchema, ToSchema,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityDto {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// All activities keyed by name.
///
/// Serialized as a JSON object whose keys keep the order of the underlying vector, which
/// `serde_json::Map` would otherwise sort.
#[derive(PartialEq, Clone, Debug)]
pub struct ActivitiesDto(pub Vec<(String, ActivityDto)>);

impl Serialize for ActivitiesDto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, activity)| (name, activity)))
    }
}

impl PartialSchema for ActivitiesDto {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::Object)
            .additional_properties(Some(RefOr::<Schema>::from(Ref::from_schema_name(
                ActivityDto::name(),
            ))))
            .into()
    }
}

impl ToSchema for ActivitiesDto {
    fn schemas(schemas: &mut Vec<(String, RefOr<Schema>)>) {
        schemas.push((ActivityDto::name().into(), ActivityDto::schema()));
        <ActivityDto as ToSchema>::schemas(schemas);
    }
}

/// Query parameters accepted by the signup endpoints.
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailParams {
    /// Student email address; matched case-insensitively.
    pub email: String,
}
