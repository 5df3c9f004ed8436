//! Common test utilities for building workflow definitions and documents.
use comfyscript::prelude::*;

/// Creates an output slot that has been connected to `links`.
#[allow(dead_code)]
pub fn linked_output(name: &str, slot: u32, links: &[LinkId]) -> WorkflowOutput {
    WorkflowOutput {
        name: name.to_string(),
        output_type: name.to_string(),
        slot_index: Some(slot),
        links: links.to_vec(),
    }
}

/// Creates an output slot that has never been connected.
#[allow(dead_code)]
pub fn unlinked_output(name: &str) -> WorkflowOutput {
    WorkflowOutput {
        name: name.to_string(),
        output_type: name.to_string(),
        slot_index: None,
        links: vec![],
    }
}

#[allow(dead_code)]
pub fn input(name: &str, link: Option<LinkId>) -> WorkflowInput {
    WorkflowInput {
        name: name.to_string(),
        link,
    }
}

/// `LoadImage -> SaveImage`
///
/// Script: `image = LoadImage()` then `SaveImage(image)`
#[allow(dead_code)]
pub fn create_simple_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            WorkflowNode {
                outputs: Some(vec![linked_output("IMAGE", 0, &[1])]),
                ..WorkflowNode::new(1, "LoadImage")
            },
            WorkflowNode {
                inputs: Some(vec![input("images", Some(1))]),
                ..WorkflowNode::new(2, "SaveImage")
            },
        ],
        links: vec![WorkflowLink::new(1, 1, 0, 2, 0, "IMAGE")],
    }
}

/// The stock text-to-image graph: checkpoint, two prompts, empty latent,
/// sampler, decode, save. Nodes are declared in editor order, not dependency
/// order, and the sampler's inputs are listed out of slot order.
#[allow(dead_code)]
pub fn create_txt2img_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            WorkflowNode {
                inputs: Some(vec![input("clip", Some(5))]),
                outputs: Some(vec![linked_output("CONDITIONING", 0, &[6])]),
                widgets_values: Some(vec!["text, watermark".into()]),
                ..WorkflowNode::new(7, "CLIPTextEncode")
            },
            WorkflowNode {
                outputs: Some(vec![linked_output("LATENT", 0, &[2])]),
                widgets_values: Some(vec![
                    WidgetValue::Int(512),
                    WidgetValue::Int(512),
                    WidgetValue::Int(1),
                ]),
                ..WorkflowNode::new(5, "EmptyLatentImage")
            },
            WorkflowNode {
                inputs: Some(vec![
                    input("latent_image", Some(2)),
                    input("model", Some(1)),
                    input("positive", Some(4)),
                    input("negative", Some(6)),
                ]),
                outputs: Some(vec![linked_output("LATENT", 0, &[7])]),
                widgets_values: Some(vec![
                    WidgetValue::Int(42),
                    "fixed".into(),
                    WidgetValue::Int(20),
                    WidgetValue::Float(8.0),
                    "euler".into(),
                    "normal".into(),
                    WidgetValue::Float(1.0),
                ]),
                ..WorkflowNode::new(3, "KSampler")
            },
            WorkflowNode {
                inputs: Some(vec![input("samples", Some(7)), input("vae", Some(8))]),
                outputs: Some(vec![linked_output("IMAGE", 0, &[9])]),
                ..WorkflowNode::new(8, "VAEDecode")
            },
            WorkflowNode {
                inputs: Some(vec![input("images", Some(9))]),
                widgets_values: Some(vec!["ComfyUI".into()]),
                ..WorkflowNode::new(9, "SaveImage")
            },
            WorkflowNode {
                outputs: Some(vec![
                    linked_output("MODEL", 0, &[1]),
                    linked_output("CLIP", 1, &[3, 5]),
                    linked_output("VAE", 2, &[8]),
                ]),
                widgets_values: Some(vec!["v1-5-pruned-emaonly.safetensors".into()]),
                ..WorkflowNode::new(4, "CheckpointLoaderSimple")
            },
            WorkflowNode {
                inputs: Some(vec![input("clip", Some(3))]),
                outputs: Some(vec![linked_output("CONDITIONING", 0, &[4])]),
                widgets_values: Some(vec!["beautiful scenery".into()]),
                ..WorkflowNode::new(6, "CLIPTextEncode")
            },
        ],
        links: vec![
            WorkflowLink::new(1, 4, 0, 3, 0, "MODEL"),
            WorkflowLink::new(2, 5, 0, 3, 3, "LATENT"),
            WorkflowLink::new(3, 4, 1, 6, 0, "CLIP"),
            WorkflowLink::new(4, 6, 0, 3, 1, "CONDITIONING"),
            WorkflowLink::new(5, 4, 1, 7, 0, "CLIP"),
            WorkflowLink::new(6, 7, 0, 3, 2, "CONDITIONING"),
            WorkflowLink::new(7, 3, 0, 8, 0, "LATENT"),
            WorkflowLink::new(8, 4, 2, 8, 1, "VAE"),
            WorkflowLink::new(9, 8, 0, 9, 0, "IMAGE"),
        ],
    }
}

/// Expected script for [`create_txt2img_workflow`].
#[allow(dead_code)]
pub const TXT2IMG_SCRIPT: &str = "\
latent = EmptyLatentImage(512, 512, 1)
(model, clip, vae) = CheckpointLoaderSimple('v1-5-pruned-emaonly.safetensors')
conditioning = CLIPTextEncode(clip, 'text, watermark')
conditioning2 = CLIPTextEncode(clip, 'beautiful scenery')
latent2 = KSampler(model, conditioning2, conditioning, latent, 42, 'fixed', 20, 8.0, 'euler', 'normal', 1.0)
image = VAEDecode(latent2, vae)
SaveImage(image, 'ComfyUI')
";

/// A saved editor document with a titled node, a never-linked output
/// (`links: null`), an unconnected input and a node whose output is unused.
#[allow(dead_code)]
pub const UPSCALE_WORKFLOW_JSON: &str = r#"{
    "last_node_id": 4,
    "last_link_id": 2,
    "nodes": [
        {
            "id": 2,
            "type": "Upscale Image",
            "title": "Big",
            "pos": [400, 120],
            "inputs": [
                { "name": "image", "type": "IMAGE", "link": 1 },
                { "name": "scale", "type": "FLOAT", "link": null }
            ],
            "outputs": [
                { "name": "IMAGE", "type": "IMAGE", "links": [2], "slot_index": 0 }
            ],
            "widgets_values": ["nearest-exact", 1.5, true]
        },
        {
            "id": 1,
            "type": "LoadImage",
            "outputs": [
                { "name": "IMAGE", "type": "IMAGE", "links": [1], "slot_index": 0 },
                { "name": "MASK", "type": "MASK", "links": null }
            ],
            "widgets_values": ["photo.png", "image"]
        },
        {
            "id": 3,
            "type": "PreviewImage",
            "inputs": [{ "name": "images", "type": "IMAGE", "link": 2 }]
        },
        {
            "id": 4,
            "type": "ImageInvert",
            "inputs": [{ "name": "image", "type": "IMAGE", "link": null }],
            "outputs": [{ "name": "IMAGE", "type": "IMAGE", "links": [], "slot_index": 0 }]
        }
    ],
    "links": [
        [1, 1, 0, 2, 0, "IMAGE"],
        [2, 2, 0, 3, 0, "IMAGE"]
    ],
    "groups": [],
    "config": {},
    "extra": {},
    "version": 0.4
}"#;

/// Expected script for [`UPSCALE_WORKFLOW_JSON`].
#[allow(dead_code)]
pub const UPSCALE_SCRIPT: &str = "\
(image, _) = LoadImage('photo.png', 'image')
big_image = UpscaleImage(image, 'nearest-exact', 1.5, True)
PreviewImage(big_image)
# _ = ImageInvert()
";
