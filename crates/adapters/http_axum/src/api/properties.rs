//! JSON handlers for property listings.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homestead_app::ports::{PropertyRepository, UserRepository};
use homestead_domain::id::PropertyId;
use homestead_domain::listing::PropertyListing;
use homestead_domain::property::{ImageList, ListingType, NewProperty, Property};

use crate::error::{ApiError, CREATE_FAILED, GET_FAILED, LIST_FAILED};
use crate::state::AppState;

/// Request body for listing a property.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub sqft: i64,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    #[serde(default)]
    pub images: ImageList,
}

/// Field constraints are checked once, by the listing service.
impl From<CreatePropertyRequest> for NewProperty {
    fn from(req: CreatePropertyRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            address: req.address,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
            bedrooms: req.bedrooms,
            bathrooms: req.bathrooms,
            sqft: req.sqft,
            listing_type: req.listing_type,
            images: req.images,
        }
    }
}

/// Possible responses from the list and recent endpoints.
pub enum ListResponse {
    Ok(Json<Vec<PropertyListing>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<PropertyListing>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<Property>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /properties`
pub async fn list<UR, PR>(
    State(state): State<AppState<UR, PR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PropertyRepository + Send + Sync + 'static,
{
    let listings = state
        .listing_service
        .list_properties()
        .await
        .map_err(ApiError::service(LIST_FAILED))?;
    Ok(ListResponse::Ok(Json(listings)))
}

/// `GET /properties/recent`
pub async fn recent<UR, PR>(
    State(state): State<AppState<UR, PR>>,
) -> Result<ListResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PropertyRepository + Send + Sync + 'static,
{
    let listings = state
        .listing_service
        .browse_properties()
        .await
        .map_err(ApiError::service(LIST_FAILED))?;
    Ok(ListResponse::Ok(Json(listings)))
}

/// `GET /properties/{id}`
pub async fn get<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PropertyRepository + Send + Sync + 'static,
{
    // An id that cannot exist is just another missing listing.
    let property_id = PropertyId::from_str(&id).map_err(|_| ApiError::NotFound)?;
    let listing = state
        .detail_service
        .get_property(property_id)
        .await
        .map_err(ApiError::service(GET_FAILED))?;
    Ok(GetResponse::Ok(Json(listing)))
}

/// `POST /properties`
pub async fn create<UR, PR>(
    State(state): State<AppState<UR, PR>>,
    payload: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    UR: UserRepository + Send + Sync + 'static,
    PR: PropertyRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state
        .listing_service
        .create_property(req.into())
        .await
        .map_err(ApiError::service(CREATE_FAILED))?;
    Ok(CreateResponse::Ok(Json(created)))
}
