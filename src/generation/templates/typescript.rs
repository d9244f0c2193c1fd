//! TypeScript MCP server template set built on `@modelcontextprotocol/sdk`.
//!
//! Render variables: `project_name`, `symbol_name`, `server_class`,
//! `description`, `author`, `version`, `sdk_package`, `sdk_version`.

use crate::generation::Capability::Resources;
use crate::generation::templates::{FileRole, FileTemplate, Gate, Section, TemplateSet};

/// Package every generated project depends on; also the marker of an
/// existing project when writing in place.
pub const SDK_PACKAGE: &str = "@modelcontextprotocol/sdk";
pub const SDK_VERSION: &str = "^1.0.0";

pub const PACKAGE_JSON: &str = "package.json";
pub const TSCONFIG_JSON: &str = "tsconfig.json";
pub const GITIGNORE: &str = ".gitignore";
pub const README_MD: &str = "README.md";
pub const ENTRYPOINT: &str = "src/index.ts";
pub const SERVER_MODULE: &str = "src/server.ts";
pub const TOOL_MODULE: &str = "src/tools/example-tool.ts";
pub const RESOURCE_MODULE: &str = "src/resources/example-resource.ts";

/// SDK type names imported by the server module only when resources are on
pub const RESOURCE_TYPE_NAMES: &[&str] = &[
    "ListResourcesRequestSchema",
    "ReadResourceRequestSchema",
    "Resource",
];

const PACKAGE_JSON_BODY: &str = r#"{
  "name": {{ project_name | json_encode }},
  "version": {{ version | json_encode }},
  "description": {{ description | json_encode }},
  "main": "dist/index.js",
  "type": "module",
  "scripts": {
    "build": "tsc",
    "dev": "tsx src/index.ts",
    "start": "node dist/index.js",
    "clean": "rm -rf dist"
  },
  "keywords": [
    "mcp",
    "model-context-protocol"
  ],
  "author": {{ author | json_encode }},
  "license": "MIT",
  "dependencies": {
    {{ sdk_package | json_encode }}: {{ sdk_version | json_encode }}
  },
  "devDependencies": {
    "typescript": "^5.3.0",
    "@types/node": "^20.10.0",
    "tsx": "^4.6.0"
  },
  "engines": {
    "node": ">=18.0.0"
  }
}
"#;

const TSCONFIG_BODY: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ESNext",
    "moduleResolution": "Node",
    "allowSyntheticDefaultImports": true,
    "esModuleInterop": true,
    "allowJs": true,
    "strict": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "outDir": "./dist",
    "rootDir": "./src",
    "sourceMap": true,
    "declaration": true,
    "declarationMap": true,
    "removeComments": false,
    "noEmitOnError": true,
    "resolveJsonModule": true
  },
  "include": [
    "src/**/*"
  ],
  "exclude": [
    "node_modules",
    "dist",
    "**/*.test.ts"
  ]
}
"#;

const GITIGNORE_BODY: &str = r#"# Dependencies
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Build outputs
dist/
build/
*.tsbuildinfo

# Logs
logs
*.log

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage
coverage/
*.lcov

# Caches
.npm
.eslintcache
.node_repl_history

# Packaging
*.tgz
.yarn-integrity

# Environment files
.env
.env.test
.env.production

# OS generated files
.DS_Store
.DS_Store?
._*
.Spotlight-V100
.Trashes
ehthumbs.db
Thumbs.db
"#;

const README_BODY: &str = r#"# {{ project_name }}

{{ description }}

## Quick Start

```bash
npm install
npm run dev
```

## Scripts

- `npm run build` - Compile TypeScript
- `npm run dev` - Development mode with hot reload
- `npm start` - Run compiled server

## MCP Configuration

### VS Code

Add to your VS Code settings (`.vscode/settings.json`):

```json
{
  "mcp.servers": {
    "{{ project_name }}": {
      "command": "node",
      "args": ["/absolute/path/to/{{ project_name }}/dist/index.js"]
    }
  }
}
```

### Cursor

Add to your Cursor settings (`.cursor/settings.json`):

```json
{
  "mcp.servers": {
    "{{ project_name }}": {
      "command": "node",
      "args": ["/absolute/path/to/{{ project_name }}/dist/index.js"]
    }
  }
}
```

**Note:** Replace `/absolute/path/to/{{ project_name }}` with the actual absolute path to this project directory.

## Development

See `src/tools/` for example implementations.
"#;

const ENTRYPOINT_BODY: &str = r#"import { {{ server_class }} } from './server.js';

async function main() {
  const server = new {{ server_class }}();
  await server.start();
}

main().catch((error) => {
  console.error('[{{ server_class }}] Failed to start server:', error);
  process.exit(1);
});
"#;

const SERVER_IMPORTS: &str = r#"import { Server } from '@modelcontextprotocol/sdk/server/index.js';
import { StdioServerTransport } from '@modelcontextprotocol/sdk/server/stdio.js';
import {
  CallToolRequestSchema,
  ListToolsRequestSchema,
  CallToolResult,
  Tool,
"#;

const SERVER_RESOURCE_IMPORTS: &str = r#"  ListResourcesRequestSchema,
  ReadResourceRequestSchema,
  Resource,
"#;

const SERVER_MODULE_IMPORTS: &str = r#"} from '@modelcontextprotocol/sdk/types.js';
import { exampleTool } from './tools/example-tool.js';
"#;

const SERVER_RESOURCE_MODULE_IMPORT: &str = r#"import { exampleResource } from './resources/example-resource.js';
"#;

const SERVER_CLASS_HEAD: &str = r#"
export class {{ server_class }} {
  private server: Server;
"#;

const SERVER_RESOURCE_FIELDS: &str = r#"  private readonly resourceUris: string[] = ['example://resource'];
"#;

const SERVER_CONSTRUCTOR_HEAD: &str = r#"
  constructor() {
    this.server = new Server(
      {
        name: '{{ project_name }}',
        version: '{{ version }}',
      },
      {
        capabilities: {
          tools: {},
"#;

const SERVER_RESOURCE_CAPABILITY: &str = r#"          resources: {},
"#;

const SERVER_CONSTRUCTOR_TAIL: &str = r#"        },
      }
    );

    this.setupHandlers();
    this.setupErrorHandling();
  }

  private setupHandlers(): void {
    this.setupToolHandlers();
"#;

const SERVER_RESOURCE_REGISTRATION: &str = r#"    this.setupResourceHandlers();
"#;

const SERVER_TOOL_HANDLERS: &str = r#"  }

  private setupToolHandlers(): void {
    this.server.setRequestHandler(ListToolsRequestSchema, async () => {
      return {
        tools: [
          {
            name: 'example_tool',
            description: 'An example tool that demonstrates MCP server capabilities',
            inputSchema: {
              type: 'object',
              properties: {
                message: {
                  type: 'string',
                  description: 'Message to process',
                },
              },
              required: ['message'],
            },
          },
        ] as Tool[],
      };
    });

    this.server.setRequestHandler(CallToolRequestSchema, async (request): Promise<CallToolResult> => {
      const { name, arguments: args } = request.params;

      try {
        switch (name) {
          case 'example_tool':
            return await exampleTool.execute(args);

          default:
            throw new Error(`Unknown tool: ${name}`);
        }
      } catch (error) {
        const errorMessage = error instanceof Error ? error.message : 'Unknown error occurred';
        return {
          content: [
            {
              type: 'text',
              text: `Error executing tool '${name}': ${errorMessage}`,
            },
          ],
          isError: true,
        };
      }
    });
  }
"#;

const SERVER_RESOURCE_HANDLERS: &str = r#"
  private setupResourceHandlers(): void {
    this.server.setRequestHandler(ListResourcesRequestSchema, async () => {
      return {
        resources: [
          {
            uri: 'example://resource',
            name: 'Example Resource',
            description: 'An example resource that demonstrates MCP server capabilities',
            mimeType: 'text/plain',
          },
        ] as Resource[],
      };
    });

    this.server.setRequestHandler(ReadResourceRequestSchema, async (request) => {
      const { uri } = request.params;

      if (!this.resourceUris.includes(uri)) {
        throw new Error(`Unknown resource: ${uri}`);
      }

      try {
        return await exampleResource.read(uri);
      } catch (error) {
        const errorMessage = error instanceof Error ? error.message : 'Unknown error occurred';
        throw new Error(`Error reading resource '${uri}': ${errorMessage}`);
      }
    });
  }
"#;

const SERVER_LIFECYCLE: &str = r#"
  private setupErrorHandling(): void {
    this.server.onerror = (error) => {
      console.error('[{{ server_class }}] Error:', error);
    };

    process.on('SIGINT', async () => {
      await this.server.close();
      process.exit(0);
    });
  }

  async start(): Promise<void> {
    const transport = new StdioServerTransport();
    await this.server.connect(transport);
    console.error('[{{ server_class }}] Server started successfully');
  }
}
"#;

const TOOL_MODULE_BODY: &str = r#"import { CallToolResult } from '@modelcontextprotocol/sdk/types.js';

interface ExampleToolArgs {
  message: string;
}

export const exampleTool = {
  async execute(args: any): Promise<CallToolResult> {
    try {
      const { message } = args as ExampleToolArgs;

      if (!message || typeof message !== 'string') {
        throw new Error('Message is required and must be a string');
      }

      // Example processing: reverse the message
      const processedMessage = message.split('').reverse().join('');

      return {
        content: [
          {
            type: 'text',
            text: `Original message: "${message}"\nProcessed message: "${processedMessage}"`,
          },
        ],
      };
    } catch (error) {
      const errorMessage = error instanceof Error ? error.message : 'Unknown error occurred';
      return {
        content: [
          {
            type: 'text',
            text: `Error in example tool: ${errorMessage}`,
          },
        ],
        isError: true,
      };
    }
  },
};
"#;

const RESOURCE_MODULE_BODY: &str = r#"import { ReadResourceResult } from '@modelcontextprotocol/sdk/types.js';

export const exampleResource = {
  async read(uri: string): Promise<ReadResourceResult> {
    if (uri !== 'example://resource') {
      throw new Error(`Resource not found: ${uri}`);
    }

    const content = `This is an example resource content.
Served at: ${new Date().toISOString()}
URI: ${uri}

This demonstrates how to implement MCP resources in your server.`;

    return {
      contents: [
        {
          uri,
          mimeType: 'text/plain',
          text: content,
        },
      ],
    };
  },
};
"#;

fn metadata(path: &'static str, body: &'static str) -> FileTemplate {
    FileTemplate {
        path,
        role: FileRole::Metadata,
        gate: Gate::Always,
        sections: vec![Section::always("body", body)],
    }
}

/// The default template set
pub fn template_set() -> TemplateSet {
    TemplateSet {
        name: "mcp/server/typescript",
        files: vec![
            metadata(PACKAGE_JSON, PACKAGE_JSON_BODY),
            metadata(TSCONFIG_JSON, TSCONFIG_BODY),
            metadata(GITIGNORE, GITIGNORE_BODY),
            metadata(README_MD, README_BODY),
            FileTemplate {
                path: ENTRYPOINT,
                role: FileRole::Source,
                gate: Gate::Always,
                sections: vec![Section::always("main", ENTRYPOINT_BODY)],
            },
            FileTemplate {
                path: SERVER_MODULE,
                role: FileRole::Source,
                gate: Gate::Always,
                sections: vec![
                    Section::always("sdk-imports", SERVER_IMPORTS),
                    Section::requires(Resources, "resource-type-imports", SERVER_RESOURCE_IMPORTS),
                    Section::always("module-imports", SERVER_MODULE_IMPORTS),
                    Section::requires(
                        Resources,
                        "resource-module-import",
                        SERVER_RESOURCE_MODULE_IMPORT,
                    ),
                    Section::always("class-head", SERVER_CLASS_HEAD),
                    Section::requires(Resources, "resource-fields", SERVER_RESOURCE_FIELDS),
                    Section::always("constructor-head", SERVER_CONSTRUCTOR_HEAD),
                    Section::requires(Resources, "resource-capability", SERVER_RESOURCE_CAPABILITY),
                    Section::always("constructor-tail", SERVER_CONSTRUCTOR_TAIL),
                    Section::requires(
                        Resources,
                        "resource-registration",
                        SERVER_RESOURCE_REGISTRATION,
                    ),
                    Section::always("tool-handlers", SERVER_TOOL_HANDLERS),
                    Section::requires(Resources, "resource-handlers", SERVER_RESOURCE_HANDLERS),
                    Section::always("lifecycle", SERVER_LIFECYCLE),
                ],
            },
            FileTemplate {
                path: TOOL_MODULE,
                role: FileRole::Source,
                gate: Gate::Always,
                sections: vec![Section::always("module", TOOL_MODULE_BODY)],
            },
            FileTemplate {
                path: RESOURCE_MODULE,
                role: FileRole::Source,
                gate: Gate::Requires(Resources),
                sections: vec![Section::always("module", RESOURCE_MODULE_BODY)],
            },
        ],
    }
}
