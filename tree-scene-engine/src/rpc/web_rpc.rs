//! JSON-RPC 2.0 bridge between the surrounding web control panel and
//! the scene, carried over `postMessage` when running in an iframe.
//! Incoming methods are translated to `SceneCommand` events; outgoing
//! notifications carry selection and state changes back to the panel.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::state::SceneCommand;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following the specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Resource managing bidirectional RPC traffic with the parent page.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send a notification to the control panel without expecting a
    /// response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();
            // Cheap pre-filter before queuing for JSON parsing.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("Failed to register message listener");
    }

    // Ownership moves to JS; the closure must outlive this system.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Thread-safe queue the WASM message listener pushes into.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut scene_commands: EventWriter<SceneCommand>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) =
                    handle_rpc_request(&request, &diagnostics, &mut scene_commands)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("malformed RPC message: {parse_error}");
            }
        }
    }
}

/// Translate one request into scene commands and build its response.
/// Requests without an id are notifications and get no response.
fn handle_rpc_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    scene_commands: &mut EventWriter<SceneCommand>,
) -> Option<RpcResponse> {
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "set_photos" => handle_set_photos(&request.params, scene_commands),
        "set_scatter" => handle_set_scatter(&request.params, scene_commands),
        "set_rotation_speed" => handle_set_rotation_speed(&request.params, scene_commands),
        "focus_photo" => handle_focus_photo(&request.params, scene_commands),
        "clear_focus" => {
            scene_commands.write(SceneCommand::ClearFocus);
            Ok(serde_json::json!({ "success": true }))
        }
        "get_fps" => handle_get_fps(diagnostics),
        _ => {
            warn!("unknown RPC method: {}", request.method);
            return Some(RpcResponse {
                jsonrpc: "2.0".to_string(),
                result: None,
                error: Some(RpcError {
                    code: -32601,
                    message: "Method not found".to_string(),
                    data: Some(serde_json::json!({ "method": request.method })),
                }),
                id: Some(id),
            });
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_set_photos(
    params: &serde_json::Value,
    scene_commands: &mut EventWriter<SceneCommand>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct SetPhotosParams {
        sources: Vec<String>,
    }

    let params = serde_json::from_value::<SetPhotosParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'sources' string array"))?;
    let count = params.sources.len();
    scene_commands.write(SceneCommand::SetPhotos(params.sources));
    Ok(serde_json::json!({ "success": true, "count": count }))
}

fn handle_set_scatter(
    params: &serde_json::Value,
    scene_commands: &mut EventWriter<SceneCommand>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct SetScatterParams {
        enabled: bool,
    }

    let params = serde_json::from_value::<SetScatterParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'enabled' boolean"))?;
    scene_commands.write(SceneCommand::SetScatter(params.enabled));
    Ok(serde_json::json!({ "success": true }))
}

fn handle_set_rotation_speed(
    params: &serde_json::Value,
    scene_commands: &mut EventWriter<SceneCommand>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct SetRotationSpeedParams {
        speed: f32,
    }

    let params = serde_json::from_value::<SetRotationSpeedParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'speed' number"))?;
    if !params.speed.is_finite() {
        return Err(RpcError::invalid_params("'speed' must be finite"));
    }
    scene_commands.write(SceneCommand::SetRotationSpeed(params.speed));
    Ok(serde_json::json!({ "success": true }))
}

fn handle_focus_photo(
    params: &serde_json::Value,
    scene_commands: &mut EventWriter<SceneCommand>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct FocusPhotoParams {
        index: usize,
    }

    let params = serde_json::from_value::<FocusPhotoParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'index' integer"))?;
    scene_commands.write(SceneCommand::FocusPhoto(params.index));
    Ok(serde_json::json!({ "success": true }))
}

fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({ "fps": fps }))
}

/// Flush queued notifications then responses, preserving order.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Post a serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}
