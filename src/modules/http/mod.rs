pub mod api_client;
pub mod transport;

pub use api_client::ApiClient;
pub use transport::{
    ApiRequest, FilePart, HttpTransport, MultipartPayload, RawResponse, RequestBody, Transport,
};
