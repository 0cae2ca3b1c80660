#[cfg(test)]
mod sim_tests {
    use crate::core::alias::{project, AliasError, KeywordPolicy, Projector};
    use crate::core::config::{ConfigManager, Settings};
    use crate::core::model::Node;
    use serde_json::json;
    use tempfile::tempdir;

    fn alert_event() -> Node {
        Node::from(json!({
            "hostname": "edge-rtr-02.dc1",
            "sysName": "edge-rtr-02",
            "severity": "critical",
            "state": 1,
            "uid": 8812,
            "title": "Port down on edge-rtr-02",
            "location": {"name": "DC1 Row 4", "lat": 52.37, "lng": 4.89},
            "rule": {"id": 17, "name": "Interface down", "builder": {"condition": "AND"}},
            "faults": [
                {"ifName": "xe-0/0/1", "ifAlias": "uplink-a", "ifOperStatus": "down"},
                {"ifName": "xe-0/0/2", "ifAlias": "uplink-b", "ifOperStatus": "down"}
            ],
            "contacts": {"noc@example.com": "NOC"},
            "alerted": false,
            "ack_msg": null
        }))
    }

    #[test]
    fn simulate_typical_webhook_projection() {
        let event = alert_event();
        let spec = "hostname as host, severity as sev, rule->name as rule, \
                    join faults->ifName as ports, location->name as site";

        let out = project(&event, spec).unwrap();

        assert_eq!(
            out.to_json(),
            json!({
                "host": "edge-rtr-02.dc1",
                "sev": "critical",
                "rule": "Interface down",
                "ports": "xe-0/0/1, xe-0/0/2",
                "site": "DC1 Row 4"
            })
        );
    }

    #[test]
    fn simulate_projection_serializes_in_alias_order() {
        let event = alert_event();
        let out = project(&event, "uid as id, faults->0->ifAlias as first, state as state").unwrap();
        let text = serde_json::to_string(&out).unwrap();
        assert_eq!(text, r#"{"id":8812,"first":"uplink-a","state":1}"#);
    }

    #[test]
    fn simulate_missing_data_aborts_delivery() {
        let event = alert_event();
        assert_eq!(
            project(&event, "hostname as host, ack_msg as note"),
            Err(AliasError::FieldNotAccessible("ack_msg".into()))
        );
        assert_eq!(
            project(&event, "join faults->ifSpeed as speeds"),
            Err(AliasError::FieldNotAccessible("ifSpeed".into()))
        );
        assert_eq!(
            project(&event, "join rule->name as names"),
            Err(AliasError::FieldNotAccessible("rule".into()))
        );
    }

    #[test]
    fn simulate_boolean_and_nested_values() {
        let event = alert_event();
        let out = project(&event, "alerted as alerted, rule->builder as builder").unwrap();
        assert_eq!(out.get("alerted"), Some(&Node::from(json!(false))));
        assert_eq!(out.get("builder"), Some(&Node::from(json!({"condition": "AND"}))));
    }

    #[test]
    fn simulate_concurrent_projection_is_deterministic() {
        let event = alert_event();
        let spec = "hostname as host, join faults->ifOperStatus as statuses, location->lat as lat";
        let expected = project(&event, spec).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| project(&event, spec)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }

    #[test]
    fn simulate_saved_settings_drive_projection() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        manager
            .save(&Settings {
                url: "https://oncall.example.com/integrations/v1/webhook/xyz/".to_string(),
                alias_spec: "sysName as device, legacy faults->1->ifName as port".to_string(),
                keyword_policy: KeywordPolicy::Fallback,
            })
            .unwrap();

        let settings = manager.load();
        let tokens = settings.validate().unwrap();
        let out = Projector::new(settings.keyword_policy)
            .project_tokens(&alert_event(), &tokens)
            .unwrap();

        assert_eq!(out.to_json(), json!({"device": "edge-rtr-02", "port": "xe-0/0/2"}));
    }
}
