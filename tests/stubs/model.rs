pub const SENSORS: &str = r#"
{
    "id": "tm-0001",
    "name": "sensors",
    "created_at": "2024-11-05T08:00:00Z",
    "updated_at": "2025-01-20T16:30:00Z",
    "properties": [
        {
            "name": "test_string_5",
            "description": "",
            "data": {
                "type": "string",
                "specs": {
                    "length": 5
                }
            }
        },
        {
            "name": "temp",
            "description": "temperature window",
            "access_mode": "r",
            "data": {
                "type": "array",
                "specs": {
                    "length": 5,
                    "data": {
                        "type": "number",
                        "specs": {
                            "min": 50,
                            "max": 100,
                            "step": 0.01
                        }
                    }
                }
            }
        },
        {
            "name": "hello",
            "description": "hello world",
            "required": true,
            "data": {
                "type": "struct",
                "specs": {
                    "name": {
                        "type": "string",
                        "specs": {
                            "length": 15
                        }
                    },
                    "age": {
                        "type": "integer",
                        "specs": {
                            "min": 0,
                            "max": 15,
                            "step": 1,
                            "unit": "y"
                        }
                    }
                }
            }
        }
    ],
    "events": [
        {
            "name": "man",
            "description": "have man",
            "type": "alert",
            "data": {
                "type": "string",
                "specs": {
                    "length": 30
                }
            }
        }
    ],
    "actions": [
        {
            "name": "reboot",
            "description": "restart the sensor node",
            "input_data": {
                "type": "void",
                "specs": {}
            },
            "output_data": {
                "type": "boolean",
                "specs": {
                    "true_desc": "restarted",
                    "false_desc": "refused"
                }
            }
        },
        {
            "name": "set_interval",
            "description": "change the reporting interval",
            "input_data": {
                "type": "integer",
                "specs": {
                    "min": 10,
                    "max": 3600,
                    "step": 10,
                    "unit": "s"
                }
            },
            "output_data": {
                "type": "void",
                "specs": {}
            }
        }
    ]
}
"#;

pub const BAD_PROPERTY_WITHOUT_DATA: &str = r#"
{
    "name": "sensors",
    "properties": [
        {
            "name": "test_string_5",
            "description": ""
        }
    ]
}
"#;

pub const BAD_UNKNOWN_DATA_TYPE: &str = r#"
{
    "name": "sensors",
    "properties": [
        {
            "name": "level",
            "data": {
                "type": "decimal",
                "specs": {}
            }
        }
    ]
}
"#;

pub const BAD_DUPLICATE_PROPERTY: &str = r#"
{
    "name": "sensors",
    "properties": [
        {
            "name": "level",
            "data": { "type": "integer", "specs": {} }
        },
        {
            "name": "level",
            "data": { "type": "number", "specs": {} }
        }
    ]
}
"#;

pub const BAD_EMPTY_PROPERTY_NAME: &str = r#"
{
    "name": "sensors",
    "properties": [
        {
            "name": "",
            "data": { "type": "integer", "specs": {} }
        }
    ]
}
"#;
