pub fn about() -> Vec<String> {
    vec![
        "A desktop remote control for a simulated television: power, mute, \
        volume, and channel controls backed by a small state model.".to_string(),
        "\n".to_string(),
        "The directional pad and OK button are intentionally inert; \
        presses are only logged.".to_string(),
        "Channel images are read from the assets directory \
        (channel0.png through channel4.png).".to_string(),
    ]
}
